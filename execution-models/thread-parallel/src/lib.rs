// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod thread_runtime;
pub use thread_runtime::{ThreadHandle, ThreadRuntime};

use execution_models_core::{ParallelDispatcher, ThreadSleepTimer};

/// One OS thread per input, joined as a barrier.
pub type ThreadDispatcher<T = ThreadSleepTimer> = ParallelDispatcher<ThreadRuntime<T>>;
