//! Progress reporting for provider calls

use cloudops_application::ports::progress::InvocationProgress;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr while waiting for the provider
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationProgress for SpinnerProgress {
    fn on_dispatch(&self, tool_name: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(tool_name.to_string());
        pb.set_message("waiting for provider...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_complete(&self, _tool_name: &str, success: bool) {
        let pb = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = pb {
            // The formatted result follows on stdout.
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl InvocationProgress for SimpleProgress {
    fn on_dispatch(&self, tool_name: &str) {
        eprintln!("{} {}", "->".cyan(), tool_name.bold());
    }

    fn on_complete(&self, tool_name: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), tool_name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), tool_name);
        }
    }
}
