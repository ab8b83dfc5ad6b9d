// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchError, InputSequence, Strategy, TaskResult};

/// Trait for abstracting worker runtime (threads, processes)
pub trait WorkerRuntime: Send + Sync {
    type Handle: Send;

    fn strategy(&self) -> Strategy;

    /// Start a worker on its own copy of `input`
    fn spawn(&self, worker_id: usize, input: InputSequence) -> Result<Self::Handle, DispatchError>;

    /// Wait for the worker to complete and hand back its result
    fn join(&self, handle: Self::Handle) -> Result<TaskResult, DispatchError>;

    /// Tear down a worker whose result is no longer wanted.
    /// Must not return before the worker is gone.
    fn abort(&self, handle: Self::Handle);
}
