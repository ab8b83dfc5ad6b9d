// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::{
    AverageTask, BlockingTimer, DispatchError, InputSequence, Strategy, TaskResult,
    ThreadSleepTimer, WorkerRuntime,
};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// OS thread-based runtime. Each worker blocks its own thread for the delay.
pub struct ThreadRuntime<T: BlockingTimer + 'static = ThreadSleepTimer> {
    task: AverageTask,
    timer: Arc<T>,
}

impl ThreadRuntime {
    pub fn new(task: AverageTask) -> Self {
        Self::with_timer(task, ThreadSleepTimer)
    }
}

impl<T: BlockingTimer + 'static> ThreadRuntime<T> {
    pub fn with_timer(task: AverageTask, timer: T) -> Self {
        Self {
            task,
            timer: Arc::new(timer),
        }
    }
}

pub struct ThreadHandle {
    worker_id: usize,
    handle: JoinHandle<TaskResult>,
}

impl<T: BlockingTimer + 'static> WorkerRuntime for ThreadRuntime<T> {
    type Handle = ThreadHandle;

    fn strategy(&self) -> Strategy {
        Strategy::ThreadParallel
    }

    fn spawn(&self, worker_id: usize, input: InputSequence) -> Result<Self::Handle, DispatchError> {
        let task = self.task;
        let timer = self.timer.clone();

        let handle = thread::Builder::new()
            .name(format!("average-worker-{}", worker_id))
            .spawn(move || {
                tracing::debug!(worker_id, "thread worker started");
                task.run_blocking(timer.as_ref(), &input, worker_id)
            })
            .map_err(|source| DispatchError::Spawn { worker_id, source })?;

        Ok(ThreadHandle { worker_id, handle })
    }

    fn join(&self, handle: Self::Handle) -> Result<TaskResult, DispatchError> {
        let worker_id = handle.worker_id;
        handle
            .handle
            .join()
            .map_err(|_| DispatchError::WorkerPanicked { worker_id })
    }

    fn abort(&self, handle: Self::Handle) {
        // Threads cannot be cancelled; wait for the worker and drop its result.
        if handle.handle.join().is_err() {
            tracing::warn!(worker_id = handle.worker_id, "aborted worker also panicked");
        }
    }
}
