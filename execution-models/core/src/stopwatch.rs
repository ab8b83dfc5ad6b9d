// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::{Duration, Instant};

/// Wall-clock measurement around a unit of work.
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Runs `work` and returns its output with the time it took.
    pub fn measure<R>(work: impl FnOnce() -> R) -> (R, Duration) {
        let stopwatch = Self::start();
        let output = work();
        (output, stopwatch.elapsed())
    }
}
