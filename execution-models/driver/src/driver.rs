// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_cooperative_async::CooperativeDispatcher;
use execution_models_core::{
    DemoConfig, DispatchError, DispatchReport, Dispatcher, InputSequence, ParallelDispatcher,
    Strategy,
};
use execution_models_process_parallel::{ProcessRuntime, WorkerCommand};
use execution_models_sequential::SequentialDispatcher;
use execution_models_thread_parallel::ThreadRuntime;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{strategy} failed: {source}")]
    Dispatch {
        strategy: Strategy,
        #[source]
        source: DispatchError,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs every strategy once, in [`Strategy::ALL`] order, over the same inputs.
/// Each dispatcher finishes completely before the next one starts.
pub struct Driver {
    inputs: Vec<InputSequence>,
    dispatchers: Vec<Box<dyn Dispatcher>>,
}

impl Driver {
    pub fn new(config: DemoConfig, worker: WorkerCommand) -> Self {
        let task = config.task();
        let dispatchers: Vec<Box<dyn Dispatcher>> = vec![
            Box::new(SequentialDispatcher::new(task)),
            Box::new(CooperativeDispatcher::new(task)),
            Box::new(ParallelDispatcher::new(ThreadRuntime::new(task))),
            Box::new(ParallelDispatcher::new(ProcessRuntime::new(task, worker))),
        ];

        Self {
            inputs: config.inputs,
            dispatchers,
        }
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        self.dispatchers.iter().map(|d| d.strategy()).collect()
    }

    /// Writes one timing line per strategy to `out`. Stops at the first
    /// failing strategy without printing a line for it.
    pub fn run(&self, out: &mut impl Write) -> Result<Vec<DispatchReport>, DriverError> {
        let mut reports = Vec::with_capacity(self.dispatchers.len());

        for dispatcher in &self.dispatchers {
            let strategy = dispatcher.strategy();
            tracing::debug!(%strategy, "starting dispatcher");

            let report = dispatcher
                .run(&self.inputs)
                .map_err(|source| DriverError::Dispatch { strategy, source })?;

            writeln!(out, "{}", report)?;
            reports.push(report);
        }

        out.flush()?;
        Ok(reports)
    }
}
