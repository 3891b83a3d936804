// Author: Dustin Pilgrim
// License: MIT

use std::future::Future;
use std::path::Path;
use std::pin::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use eventline::runtime::{self, LogLevel};

use crate::paths::ensure_parent_dir;

/// Where eventline writes and how loud it is.
#[derive(Debug, Clone, Copy)]
pub struct LogSetup<'a> {
    pub file: &'a Path,
    pub verbose: bool,
}

impl LogSetup<'_> {
    fn level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    pub fn install(self) -> Result<(), String> {
        ensure_parent_dir(self.file).map_err(|e| format!("create log dir: {e}"))?;

        run_to_completion(runtime::init());

        runtime::enable_file_output(self.file)
            .map_err(|e| format!("enable file output: {e}"))?;

        // stdout carries replay output; stderr only gets logs with -v
        runtime::enable_console_output(self.verbose);
        runtime::enable_console_color(self.verbose);
        runtime::set_log_level(self.level());

        Ok(())
    }
}

pub fn init_logging(log_path: &Path, verbose: bool) -> Result<(), String> {
    LogSetup {
        file: log_path,
        verbose,
    }
    .install()
}

struct Noop;

impl Wake for Noop {
    fn wake(self: Arc<Self>) {}
}

// eventline's init is async but never parks on I/O, so spinning is enough
fn run_to_completion<F: Future>(fut: F) -> F::Output {
    let waker = Waker::from(Arc::new(Noop));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);

    loop {
        if let Poll::Ready(v) = fut.as_mut().poll(&mut cx) {
            return v;
        }
        std::thread::yield_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_to_completion_returns_ready_value() {
        assert_eq!(run_to_completion(async { 7 }), 7);
    }

    #[test]
    fn verbose_selects_debug_level() {
        let file = Path::new("/tmp/selbox-test.log");
        assert!(matches!(LogSetup { file, verbose: true }.level(), LogLevel::Debug));
        assert!(matches!(LogSetup { file, verbose: false }.level(), LogLevel::Info));
    }
}
