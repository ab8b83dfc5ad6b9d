// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchError, DispatchReport, InputSequence, Stopwatch, Strategy, TaskResult};

/// One execution strategy for running a task per input.
/// Implemented once per model: sequential, cooperative, threads, processes.
pub trait Dispatcher {
    fn strategy(&self) -> Strategy;

    /// Runs one task per input and returns the results in input order.
    /// Returns only after every launched unit of work has finished.
    fn dispatch(&self, inputs: &[InputSequence]) -> Result<Vec<TaskResult>, DispatchError>;

    /// Dispatches under a stopwatch.
    fn run(&self, inputs: &[InputSequence]) -> Result<DispatchReport, DispatchError> {
        let (results, elapsed) = Stopwatch::measure(|| self.dispatch(inputs));
        let results = results?;

        tracing::info!(
            strategy = %self.strategy(),
            elapsed_secs = elapsed.as_secs_f64(),
            means = ?results.iter().map(|r| r.mean).collect::<Vec<_>>(),
            "dispatch finished"
        );

        Ok(DispatchReport {
            strategy: self.strategy(),
            results,
            elapsed,
        })
    }
}
