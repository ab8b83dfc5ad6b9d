// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::{
    AverageTask, BlockingTimer, DispatchError, Dispatcher, InputSequence, Strategy, TaskResult,
    ThreadSleepTimer,
};

/// Runs each task to completion on the calling thread, one after another.
pub struct SequentialDispatcher<T: BlockingTimer = ThreadSleepTimer> {
    task: AverageTask,
    timer: T,
}

impl SequentialDispatcher {
    pub fn new(task: AverageTask) -> Self {
        Self::with_timer(task, ThreadSleepTimer)
    }
}

impl<T: BlockingTimer> SequentialDispatcher<T> {
    pub fn with_timer(task: AverageTask, timer: T) -> Self {
        Self { task, timer }
    }
}

impl<T: BlockingTimer> Dispatcher for SequentialDispatcher<T> {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn dispatch(&self, inputs: &[InputSequence]) -> Result<Vec<TaskResult>, DispatchError> {
        Ok(inputs
            .iter()
            .enumerate()
            .map(|(worker_id, input)| {
                tracing::debug!(worker_id, "running task inline");
                self.task.run_blocking(&self.timer, input, worker_id)
            })
            .collect())
    }
}
