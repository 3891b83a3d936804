// Author: Dustin Pilgrim
// License: MIT

use eventline::{debug, info, warn};

use selbox_core::{Gesture, HandleLayout, Rect};

use crate::cli::{Args, Cmd};
use crate::config::{self, SelboxConfig};
use crate::paths;
use crate::print;
use crate::replay::Replay;
use crate::script::{self, MAX_COORD};

pub fn run(args: Args) -> Result<(), String> {
    let config_path = args.config.unwrap_or_else(paths::default_config_path);
    debug!("config path: {}", config_path.display());

    let cfg = config::load(&config_path)?;
    debug!("config: {:?}", cfg);

    match args.cmd {
        Cmd::Replay {
            script,
            width,
            height,
            ratio,
            confine,
            trace,
        } => {
            let mut cfg = cfg;
            if let Some(w) = width {
                cfg.host.width = w;
            }
            if let Some(h) = height {
                cfg.host.height = h;
            }
            if let Some(r) = ratio {
                cfg.options.ratio = r;
                cfg.options.ratio_enforced = true;
            }
            if confine {
                cfg.options.confine_to_host = true;
            }
            run_replay(&cfg, &script, trace)
        }

        Cmd::Layout {
            x,
            y,
            w,
            h,
            handle_size,
        } => {
            if w < 0 || h < 0 {
                return Err(format!("layout needs a non-negative size, got {w}x{h}"));
            }
            if [x, y, w, h].iter().any(|v| v.abs_diff(0) > MAX_COORD.unsigned_abs()) {
                return Err(format!("layout values must stay within -{MAX_COORD}..={MAX_COORD}"));
            }
            let size = handle_size.unwrap_or(cfg.style.handle_size);
            let layout = HandleLayout::for_bounds(Rect::new(x, y, w, h), size);
            print::print_layout(&layout);
            Ok(())
        }
    }
}

fn run_replay(cfg: &SelboxConfig, script_path: &std::path::Path, trace: bool) -> Result<(), String> {
    let lines = script::load_script(script_path)?;
    info!(
        "replaying {} step(s) from {} on {}x{} host",
        lines.len(),
        script_path.display(),
        cfg.host.width,
        cfg.host.height
    );

    if cfg.options.confine_to_host && (cfg.host.width <= 0 || cfg.host.height <= 0) {
        warn!(
            "confinement enabled on an empty {}x{} host",
            cfg.host.width, cfg.host.height
        );
    }

    let mut replay = Replay::new(cfg.host, cfg.options, cfg.style.handle_size);
    let entries = replay.run(&lines);

    let mut before = Gesture::Idle;
    let mut last_hint = None;

    for entry in &entries {
        let line = entry.line;
        debug!("line {}: {:?} -> {:?}", line.number, line.step, entry.bounds);

        if std::mem::discriminant(&entry.gesture) != std::mem::discriminant(&before) {
            info!("line {}: gesture {:?} -> {:?}", line.number, before, entry.gesture);
        }
        before = entry.gesture;
        if entry.hint.is_some() {
            last_hint = entry.hint;
        }
        if trace {
            print::print_trace_entry(entry);
        }
    }

    let c = replay.controller();
    print::print_summary(c.bounds(), c.is_visible(), last_hint, replay.redraws());
    Ok(())
}
