// Author: Dustin Pilgrim
// License: MIT
//
// Line-based gesture scripts:
//
//   # comment
//   host 800 600
//   press 10 10
//   drag 40 30
//   release 40 30
//   hover 20 20
//   bounds 0 0 100 100
//   visible on
//   ratio 16:9 | ratio off
//   confine on

use std::path::Path;

use thiserror::Error;

use selbox_core::{AspectRatio, Extent, PointerEvent, PointerKind, Rect};

/// Largest coordinate or size a script may use; keeps corner and
/// translate arithmetic well inside `i32`.
pub const MAX_COORD: i32 = 1 << 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command \"{command}\"")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {command} expects {expected} argument(s), got {got}")]
    Arity {
        line: usize,
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid number \"{value}\"")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {value} is outside -{max}..={max}")]
    OutOfRange { line: usize, value: i32, max: i32 },

    #[error("line {line}: {message}")]
    Invalid { line: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Pointer(PointerEvent),
    Host(Extent),
    Bounds(Rect),
    Visible(bool),
    /// `None` turns ratio enforcement off.
    Ratio(Option<AspectRatio>),
    Confine(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub step: Step,
}

pub fn load_script(path: &Path) -> Result<Vec<Line>, String> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| format!("read script '{}': {e}", path.display()))?;
    parse_script(&src).map_err(|e| e.to_string())
}

pub fn parse_script(src: &str) -> Result<Vec<Line>, ScriptError> {
    let mut out = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let number = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut words = text.split_whitespace();
        let Some(command) = words.next() else { continue };
        let args: Vec<&str> = words.collect();

        let step = parse_step(number, &command.to_lowercase(), &args)?;
        out.push(Line { number, step });
    }

    Ok(out)
}

fn parse_step(line: usize, command: &str, args: &[&str]) -> Result<Step, ScriptError> {
    let arity = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::Arity {
                line,
                command: command.to_string(),
                expected,
                got: args.len(),
            })
        }
    };

    let pointer = |kind: PointerKind| -> Result<Step, ScriptError> {
        arity(2)?;
        let x = number(line, args[0])?;
        let y = number(line, args[1])?;
        Ok(Step::Pointer(PointerEvent::new(kind, x, y)))
    };

    match command {
        "press" | "down" => pointer(PointerKind::Press),
        "drag" | "move" => pointer(PointerKind::Drag),
        "release" | "up" => pointer(PointerKind::Release),
        "hover" => pointer(PointerKind::Hover),

        "host" => {
            arity(2)?;
            Ok(Step::Host(Extent::new(
                number(line, args[0])?,
                number(line, args[1])?,
            )))
        }

        "bounds" => {
            arity(4)?;
            let w = number(line, args[2])?;
            let h = number(line, args[3])?;
            if w < 0 || h < 0 {
                return Err(ScriptError::Invalid {
                    line,
                    message: format!("bounds need a non-negative size, got {w}x{h}"),
                });
            }
            Ok(Step::Bounds(Rect::new(
                number(line, args[0])?,
                number(line, args[1])?,
                w,
                h,
            )))
        }

        "visible" => {
            arity(1)?;
            Ok(Step::Visible(switch(line, args[0])?))
        }

        "confine" => {
            arity(1)?;
            Ok(Step::Confine(switch(line, args[0])?))
        }

        "ratio" => {
            arity(1)?;
            if args[0].eq_ignore_ascii_case("off") {
                return Ok(Step::Ratio(None));
            }
            let r: AspectRatio = args[0]
                .parse()
                .map_err(|message| ScriptError::Invalid { line, message })?;
            Ok(Step::Ratio(Some(r)))
        }

        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

fn number(line: usize, s: &str) -> Result<i32, ScriptError> {
    let value: i32 = s.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: s.to_string(),
    })?;
    if value.abs_diff(0) > MAX_COORD.unsigned_abs() {
        return Err(ScriptError::OutOfRange {
            line,
            value,
            max: MAX_COORD,
        });
    }
    Ok(value)
}

fn switch(line: usize, s: &str) -> Result<bool, ScriptError> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(ScriptError::Invalid {
            line,
            message: format!("expected on|off, got \"{s}\""),
        }),
    }
}
