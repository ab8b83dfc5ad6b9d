// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::TokioTimer;
use execution_models_core::{
    AverageTask, DispatchError, Dispatcher, InputSequence, Strategy, TaskResult, Timer,
};
use std::sync::Arc;
use tokio::runtime::Builder;
use tokio::task::JoinSet;

/// Runs every task on a single-threaded Tokio scheduler.
///
/// All tasks are spawned before any is awaited, so while one is suspended
/// in its delay the scheduler resumes the others. A fresh scheduler is
/// built per dispatch and dropped with it.
pub struct CooperativeDispatcher<T: Timer + 'static = TokioTimer> {
    task: AverageTask,
    timer: Arc<T>,
}

impl CooperativeDispatcher {
    pub fn new(task: AverageTask) -> Self {
        Self::with_timer(task, TokioTimer)
    }
}

impl<T: Timer + 'static> CooperativeDispatcher<T> {
    pub fn with_timer(task: AverageTask, timer: T) -> Self {
        Self {
            task,
            timer: Arc::new(timer),
        }
    }

    /// Spawns one task per input, then waits for the whole set.
    /// The first failure aborts and drains the rest before returning.
    pub async fn gather(
        &self,
        inputs: &[InputSequence],
    ) -> Result<Vec<TaskResult>, DispatchError> {
        let mut tasks = JoinSet::new();
        for (worker_id, input) in inputs.iter().cloned().enumerate() {
            let task = self.task;
            let timer = self.timer.clone();
            tasks.spawn(async move {
                tracing::debug!(worker_id, "cooperative task started");
                task.run(timer.as_ref(), &input, worker_id).await
            });
        }

        let mut results = Vec::with_capacity(inputs.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(error = %e, "cooperative task failed, aborting the rest");
                    tasks.abort_all();
                    while tasks.join_next().await.is_some() {}
                    return Err(DispatchError::TaskFailed {
                        reason: e.to_string(),
                    });
                }
            }
        }

        // join_next yields in completion order
        results.sort_by_key(|result| result.worker_id);
        Ok(results)
    }
}

impl<T: Timer + 'static> Dispatcher for CooperativeDispatcher<T> {
    fn strategy(&self) -> Strategy {
        Strategy::CooperativeAsync
    }

    fn dispatch(&self, inputs: &[InputSequence]) -> Result<Vec<TaskResult>, DispatchError> {
        let runtime = Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(DispatchError::Runtime)?;
        runtime.block_on(self.gather(inputs))
    }
}
