// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::process::ExitStatus;
use thiserror::Error;

/// Every way a dispatcher invocation can fail instead of producing a report.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("input sequence must contain at least one value")]
    EmptyInput,

    #[error("failed to start worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },

    #[error("worker {worker_id} exited with {status}")]
    WorkerExited { worker_id: usize, status: ExitStatus },

    #[error("cooperative task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("worker {worker_id} protocol error: {reason}")]
    Protocol { worker_id: usize, reason: String },

    #[error("I/O error talking to worker {worker_id}: {source}")]
    Io {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build scheduler: {0}")]
    Runtime(#[source] std::io::Error),
}

impl DispatchError {
    /// Worker the failure is attributed to, if any.
    pub fn worker_id(&self) -> Option<usize> {
        match self {
            Self::Spawn { worker_id, .. }
            | Self::WorkerPanicked { worker_id }
            | Self::WorkerExited { worker_id, .. }
            | Self::Protocol { worker_id, .. }
            | Self::Io { worker_id, .. } => Some(*worker_id),
            Self::EmptyInput | Self::TaskFailed { .. } | Self::Runtime(_) => None,
        }
    }
}
