use crate::error::Result;
use crate::ui;
use std::time::{Duration, Instant};

/// Announces and times the steps of a command
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<&'static str>,
    current_step: usize,
}

impl ProgressTracker {
    /// Create a new progress tracker with the given operation name and steps
    pub fn new(operation_name: &str, steps: &[&'static str]) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: steps.to_vec(),
            current_step: 0,
        }
    }

    /// Runs the next step, reporting it as done only if `f` succeeds
    pub fn step<T>(&mut self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let name = self.steps.get(self.current_step).copied();
        if let Some(name) = name {
            ui::status_message(name);
        }
        let value = f()?;
        if let Some(name) = name {
            ui::success_message(name);
            self.current_step += 1;
        }
        Ok(value)
    }

    /// Complete the operation
    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            Self::format_duration(self.start_time.elapsed())
        ));
    }

    /// Format a duration in a human-readable way
    fn format_duration(duration: Duration) -> String {
        let seconds = duration.as_secs();
        if seconds < 60 {
            format!("{seconds} seconds")
        } else if seconds < 3600 {
            format!(
                "{} minutes {seconds_remainder} seconds",
                seconds / 60,
                seconds_remainder = seconds % 60
            )
        } else {
            format!(
                "{hours} hours {minutes} minutes",
                hours = seconds / 3600,
                minutes = (seconds % 3600) / 60
            )
        }
    }
}
