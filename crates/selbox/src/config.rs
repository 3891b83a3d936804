// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use rune_cfg::RuneConfig;

use selbox_core::{AspectRatio, Extent, SelectionOptions, SelectionStyle};

#[derive(Debug, Clone)]
pub struct SelboxConfig {
    pub options: SelectionOptions,
    pub style: SelectionStyle,
    pub host: Extent,
}

impl Default for SelboxConfig {
    fn default() -> Self {
        Self {
            options: SelectionOptions::default(),
            style: SelectionStyle::default(),
            host: Extent::new(800, 600),
        }
    }
}

pub fn load(path: &Path) -> Result<SelboxConfig, String> {
    if !path.exists() {
        return Ok(SelboxConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<SelboxConfig, String> {
    let mut cfg = SelboxConfig::default();

    if !rc.has("selbox") {
        return Ok(cfg);
    }

    if let Some(v) = get(rc, "ratio_enforced")? {
        cfg.options.ratio_enforced = parse_bool(&v).map_err(|e| at("ratio_enforced", e))?;
    }

    // "off" wins over ratio_enforced
    if let Some(v) = get(rc, "ratio")? {
        match parse_ratio(&v).map_err(|e| at("ratio", e))? {
            Some(r) => cfg.options.ratio = r,
            None => cfg.options.ratio_enforced = false,
        }
    }

    if let Some(v) = get(rc, "confine_to_host")? {
        cfg.options.confine_to_host = parse_bool(&v).map_err(|e| at("confine_to_host", e))?;
    }

    if let Some(v) = get(rc, "handle_size")? {
        cfg.style.handle_size = parse_positive(&v).map_err(|e| at("handle_size", e))?;
    }

    if let Some(v) = get(rc, "border_thickness")? {
        cfg.style.border_thickness = parse_positive(&v).map_err(|e| at("border_thickness", e))?;
    }

    if let Some(v) = get(rc, "accent_colour")? {
        cfg.style.accent_colour = parse_hex_colour(&v).map_err(|e| at("accent_colour", e))?;
    }

    if let Some(v) = get(rc, "host_width")? {
        cfg.host.width = parse_positive(&v).map_err(|e| at("host_width", e))?;
    }

    if let Some(v) = get(rc, "host_height")? {
        cfg.host.height = parse_positive(&v).map_err(|e| at("host_height", e))?;
    }

    Ok(cfg)
}

fn get(rc: &RuneConfig, key: &str) -> Result<Option<String>, String> {
    let path = format!("selbox.{key}");
    rc.get_optional::<String>(&path)
        .map_err(|e| format!("config error at {path}: {e}"))
}

fn at(key: &str, e: String) -> String {
    format!("config error at selbox.{key}: {e}")
}

/// `"W:H"` sets a ratio, `"off"` disables enforcement.
fn parse_ratio(s: &str) -> Result<Option<AspectRatio>, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("off") || s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    s.parse().map(Some)
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected true|false, got \"{other}\"")),
    }
}

fn parse_positive(s: &str) -> Result<i32, String> {
    let n: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected a number, got \"{}\"", s.trim()))?;
    if n <= 0 {
        return Err(format!("must be positive, got {n}"));
    }
    Ok(n)
}

fn parse_hex_colour(s: &str) -> Result<u32, String> {
    let s = s.trim();

    let Some(hex) = s.strip_prefix('#') else {
        return Err("colour must start with #".into());
    };

    if hex.len() != 6 {
        return Err("colour must be 6 hex digits (RRGGBB)".into());
    }

    let rgb = u32::from_str_radix(hex, 16).map_err(|_| "invalid hex colour".to_string())?;

    Ok(0xFF00_0000 | rgb)
}
