use std::time::{Duration, Instant};

/// Statistics across runs. The engine resets the score with every
/// game-over, so "best so far" and "runs ended" live out here, fed from
/// the tick outcomes.
pub struct RunMetrics {
    pub session_start: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub runs_ended: u32,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self {
            session_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            runs_ended: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.session_start.elapsed();
    }

    /// Record a run that just ended with the given score.
    pub fn on_run_end(&mut self, final_score: u32) {
        self.runs_ended += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
