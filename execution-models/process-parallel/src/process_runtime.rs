// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{WorkerCommand, WorkerReply, WorkerRequest};
use execution_models_core::{
    AverageTask, DispatchError, InputSequence, Strategy, TaskResult, WorkerRuntime,
};
use std::io::Write;
use std::process::{Child, Stdio};

/// Child process-based runtime. Each worker is a separate OS process that
/// receives its input by value over stdin and answers over stdout.
pub struct ProcessRuntime {
    task: AverageTask,
    command: WorkerCommand,
}

impl ProcessRuntime {
    pub fn new(task: AverageTask, command: WorkerCommand) -> Self {
        Self { task, command }
    }
}

pub struct ProcessHandle {
    worker_id: usize,
    child: Child,
}

impl WorkerRuntime for ProcessRuntime {
    type Handle = ProcessHandle;

    fn strategy(&self) -> Strategy {
        Strategy::ProcessParallel
    }

    fn spawn(&self, worker_id: usize, input: InputSequence) -> Result<Self::Handle, DispatchError> {
        let request = WorkerRequest::new(worker_id, input, self.task.delay());
        let mut line = serde_json::to_vec(&request).map_err(|e| DispatchError::Protocol {
            worker_id,
            reason: e.to_string(),
        })?;
        line.push(b'\n');

        let mut child = self
            .command
            .to_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| DispatchError::Spawn { worker_id, source })?;
        tracing::debug!(worker_id, pid = child.id(), "worker process started");

        // Dropping stdin closes the pipe, which is the worker's end of request.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(&line) {
                // A worker that stopped reading fails at join with its exit status.
                tracing::warn!(worker_id, error = %e, "failed to send request");
            }
        }

        Ok(ProcessHandle { worker_id, child })
    }

    fn join(&self, handle: Self::Handle) -> Result<TaskResult, DispatchError> {
        let worker_id = handle.worker_id;
        let output = handle
            .child
            .wait_with_output()
            .map_err(|source| DispatchError::Io { worker_id, source })?;

        if !output.status.success() {
            return Err(DispatchError::WorkerExited {
                worker_id,
                status: output.status,
            });
        }

        let reply: WorkerReply =
            serde_json::from_slice(&output.stdout).map_err(|e| DispatchError::Protocol {
                worker_id,
                reason: e.to_string(),
            })?;

        if reply.worker_id != worker_id {
            return Err(DispatchError::Protocol {
                worker_id,
                reason: format!("reply is for worker {}", reply.worker_id),
            });
        }

        Ok(TaskResult {
            worker_id,
            mean: reply.mean,
        })
    }

    fn abort(&self, mut handle: Self::Handle) {
        if let Err(e) = handle.child.kill() {
            tracing::warn!(worker_id = handle.worker_id, error = %e, "failed to kill worker");
        }
        // reap so no zombie outlives the dispatch
        let _ = handle.child.wait();
    }
}
