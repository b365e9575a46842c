use std::time::{Duration, Instant};

use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

pub struct Progress {
    enabled: bool,
    start: Instant,
    stage: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        let start = Instant::now();

        if !enabled {
            return Self {
                enabled: false,
                start,
                stage: ProgressBar::hidden(),
            };
        }

        let stage = ProgressBar::new_spinner();
        stage.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        stage.enable_steady_tick(Duration::from_millis(80));
        stage.set_message("starting");

        Self {
            enabled: true,
            start,
            stage,
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn finish(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.finish_with_message(format!(
            "{} in {}",
            msg.into(),
            HumanDuration(self.start.elapsed())
        ));
    }
}
