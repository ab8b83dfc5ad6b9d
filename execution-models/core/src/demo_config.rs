// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AverageTask, InputSequence};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Everything a run needs: the simulated latency and the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub delay: Duration,
    pub inputs: Vec<InputSequence>,
}

impl DemoConfig {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn task(&self) -> AverageTask {
        AverageTask::new(self.delay)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            inputs: InputSequence::samples(),
        }
    }
}
