// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchError, Dispatcher, InputSequence, Strategy, TaskResult, WorkerRuntime};

/// Fan-out/barrier dispatcher over any [`WorkerRuntime`].
///
/// Every worker is spawned before the first join, so their delays overlap.
/// On the first spawn or join failure the remaining workers are aborted
/// and that failure is returned.
pub struct ParallelDispatcher<R: WorkerRuntime> {
    runtime: R,
}

impl<R: WorkerRuntime> ParallelDispatcher<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    fn abort_all(&self, handles: impl IntoIterator<Item = R::Handle>) {
        for handle in handles {
            self.runtime.abort(handle);
        }
    }
}

impl<R: WorkerRuntime> Dispatcher for ParallelDispatcher<R> {
    fn strategy(&self) -> Strategy {
        self.runtime.strategy()
    }

    fn dispatch(&self, inputs: &[InputSequence]) -> Result<Vec<TaskResult>, DispatchError> {
        let mut handles = Vec::with_capacity(inputs.len());
        for (worker_id, input) in inputs.iter().enumerate() {
            match self.runtime.spawn(worker_id, input.clone()) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    tracing::error!(worker_id, error = %e, "spawn failed, aborting started workers");
                    self.abort_all(handles);
                    return Err(e);
                }
            }
        }

        let mut results = Vec::with_capacity(handles.len());
        let mut pending = handles.into_iter();
        while let Some(handle) = pending.next() {
            match self.runtime.join(handle) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(error = %e, "worker failed, aborting the rest");
                    self.abort_all(pending);
                    return Err(e);
                }
            }
        }

        Ok(results)
    }
}
