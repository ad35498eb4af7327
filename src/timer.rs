use std::time::{Duration, Instant};

use log::debug;

/// Measures a run split into named phases.
pub struct Timer {
    start_time: Instant,
    lap_start: Instant,
    laps: Vec<(&'static str, Duration)>,
}

impl Timer {
    pub fn start() -> Self {
        let now = Instant::now();
        Timer {
            start_time: now,
            lap_start: now,
            laps: vec![],
        }
    }

    /// Closes the current phase under `name` and starts the next one.
    pub fn lap(&mut self, name: &'static str) -> Duration {
        let now = Instant::now();
        let duration = now - self.lap_start;
        self.lap_start = now;
        self.laps.push((name, duration));
        debug!("{} took {:?}", name, duration);
        duration
    }

    pub fn laps(&self) -> &[(&'static str, Duration)] {
        &self.laps
    }

    /// Returns the time since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_add_up_to_at_most_the_total() {
        let mut timer = Timer::start();
        timer.lap("first");
        timer.lap("second");
        let total: Duration = timer.laps().iter().map(|it| it.1).sum();
        assert_eq!(
            timer.laps().iter().map(|it| it.0).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
        assert!(total <= timer.elapsed());
    }
}
