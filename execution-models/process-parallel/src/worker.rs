// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Child side of the process runtime.

use crate::{WorkerReply, WorkerRequest};
use execution_models_core::{AverageTask, ThreadSleepTimer};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("no request received on stdin")]
    MissingRequest,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("worker I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads one request line, runs the task with a blocking delay, writes
/// one reply line.
pub fn run_worker(mut input: impl BufRead, mut output: impl Write) -> Result<(), WorkerError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WorkerError::MissingRequest);
    }
    let request: WorkerRequest = serde_json::from_str(&line)?;

    tracing::debug!(
        worker_id = request.worker_id,
        pid = std::process::id(),
        "worker process running task"
    );

    let task = AverageTask::new(request.delay());
    let result = task.run_blocking(&ThreadSleepTimer, &request.input, request.worker_id);

    let reply = WorkerReply {
        worker_id: result.worker_id,
        mean: result.mean,
    };
    serde_json::to_writer(&mut output, &reply)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
