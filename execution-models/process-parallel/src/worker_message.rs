// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::InputSequence;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sent by the parent on the worker's stdin, one JSON line.
/// The input travels as a copy; nothing is shared with the parent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkerRequest {
    pub worker_id: usize,
    pub input: InputSequence,
    pub delay_ms: u64,
}

impl WorkerRequest {
    pub fn new(worker_id: usize, input: InputSequence, delay: Duration) -> Self {
        Self {
            worker_id,
            input,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Written by the worker on its stdout, one JSON line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkerReply {
    pub worker_id: usize,
    pub mean: f64,
}
