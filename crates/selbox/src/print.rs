// Author: Dustin Pilgrim
// License: MIT

use selbox_core::{CursorHint, Gesture, HandleLayout, Rect};

use crate::replay::TraceEntry;
use crate::script::Step;

pub fn fmt_rect(r: Rect) -> String {
    format!("({}, {}) {}x{}", r.x, r.y, r.w, r.h)
}

fn fmt_gesture(g: Gesture) -> String {
    match g {
        Gesture::Idle => "idle".into(),
        Gesture::Creating { anchor } => format!("creating from ({}, {})", anchor.x, anchor.y),
        Gesture::Resizing { anchor, handle } => {
            format!("resizing {handle:?} around ({}, {})", anchor.x, anchor.y)
        }
        Gesture::Moving { last } => format!("moving from ({}, {})", last.x, last.y),
    }
}

fn fmt_step(step: Step) -> String {
    match step {
        Step::Pointer(ev) => format!("{:?} ({}, {})", ev.kind, ev.point.x, ev.point.y),
        Step::Host(e) => format!("host {}x{}", e.width, e.height),
        Step::Bounds(r) => format!("bounds {}", fmt_rect(r)),
        Step::Visible(v) => format!("visible {}", if v { "on" } else { "off" }),
        Step::Ratio(Some(r)) => format!("ratio {r}"),
        Step::Ratio(None) => "ratio off".into(),
        Step::Confine(v) => format!("confine {}", if v { "on" } else { "off" }),
    }
}

pub fn print_trace_entry(entry: &TraceEntry) {
    let mut line = format!(
        "{:>4}: {:<24} -> {} [{}]",
        entry.line.number,
        fmt_step(entry.line.step),
        fmt_rect(entry.bounds),
        fmt_gesture(entry.gesture),
    );
    if !entry.visible {
        line.push_str(" hidden");
    }
    if let Some(hint) = entry.hint {
        line.push_str(&format!(" cursor={}", hint.name()));
    }
    println!("{line}");
}

pub fn print_summary(bounds: Rect, visible: bool, last_hint: Option<CursorHint>, redraws: usize) {
    if bounds.is_empty() {
        println!("bounds: {} (empty)", fmt_rect(bounds));
    } else {
        println!("bounds: {}", fmt_rect(bounds));
    }
    println!("visible: {visible}");
    match last_hint {
        Some(h) => println!("cursor: {}", h.name()),
        None => println!("cursor: none"),
    }
    println!("redraws: {redraws}");
}

pub fn print_layout(layout: &HandleLayout) {
    for (handle, r) in layout.iter() {
        println!("{:<12} {}", format!("{handle:?}"), fmt_rect(r));
    }
}
