// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod worker_message;
pub use worker_message::{WorkerReply, WorkerRequest};

mod worker_command;
pub use worker_command::WorkerCommand;

mod process_runtime;
pub use process_runtime::{ProcessHandle, ProcessRuntime};

pub mod worker;
pub use worker::{run_worker, WorkerError};

use execution_models_core::ParallelDispatcher;

/// One child process per input, waited on as a barrier.
pub type ProcessDispatcher = ParallelDispatcher<ProcessRuntime>;
