// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod input_sequence;
pub use input_sequence::InputSequence;

mod task_result;
pub use task_result::TaskResult;

mod dispatch_error;
pub use dispatch_error::DispatchError;

pub mod timer;
pub use timer::{BlockingTimer, ThreadSleepTimer, Timer};

pub mod average_task;
pub use average_task::{mean, AverageTask};

mod stopwatch;
pub use stopwatch::Stopwatch;

mod strategy;
pub use strategy::Strategy;

mod dispatch_report;
pub use dispatch_report::DispatchReport;

mod dispatcher;
pub use dispatcher::Dispatcher;

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

mod parallel_dispatcher;
pub use parallel_dispatcher::ParallelDispatcher;

mod demo_config;
pub use demo_config::DemoConfig;

pub mod logging;
pub use logging::init_logging;
