// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Strategy, TaskResult};
use std::fmt;
use std::time::Duration;

/// What one dispatcher invocation produced. Lives only until printed.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub strategy: Strategy,
    pub results: Vec<TaskResult>,
    pub elapsed: Duration,
}

impl DispatchReport {
    /// Means in input order.
    pub fn means(&self) -> Vec<f64> {
        self.results.iter().map(|result| result.mean).collect()
    }
}

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Elapsed Time: {} seconds",
            self.strategy,
            self.elapsed.as_secs_f64()
        )
    }
}
