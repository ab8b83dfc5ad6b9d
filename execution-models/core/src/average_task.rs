// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{BlockingTimer, InputSequence, TaskResult, Timer};
use std::time::Duration;

/// Arithmetic mean of a non-empty sequence.
pub fn mean(input: &InputSequence) -> f64 {
    let sum: i64 = input.values().iter().sum();
    sum as f64 / input.len() as f64
}

/// The unit of work every dispatcher runs: average the input, then wait
/// out a simulated latency of `delay`.
///
/// The two entry points differ only in the delay primitive. `run_blocking`
/// holds its thread for the whole delay; `run` yields to the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct AverageTask {
    delay: Duration,
}

impl AverageTask {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn run_blocking<T: BlockingTimer>(
        &self,
        timer: &T,
        input: &InputSequence,
        worker_id: usize,
    ) -> TaskResult {
        let mean = mean(input);
        timer.sleep(self.delay);
        TaskResult { worker_id, mean }
    }

    pub async fn run<T: Timer>(
        &self,
        timer: &T,
        input: &InputSequence,
        worker_id: usize,
    ) -> TaskResult {
        let mean = mean(input);
        timer.sleep(self.delay).await;
        TaskResult { worker_id, mean }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records requested delays instead of sleeping.
    #[derive(Default)]
    struct RecordingTimer {
        slept: Mutex<Vec<Duration>>,
    }

    impl BlockingTimer for RecordingTimer {
        fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    #[async_trait::async_trait]
    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    #[test]
    fn test_mean_of_samples() {
        let samples = InputSequence::samples();
        assert_eq!(mean(&samples[0]), 5.5);
        assert_eq!(mean(&samples[1]), 6.0);
        assert_eq!(mean(&samples[2]), 6.0);
    }

    #[test]
    fn test_mean_of_single_element_is_the_element() {
        let input = InputSequence::new(vec![42]).unwrap();
        assert_eq!(mean(&input), 42.0);
    }

    #[test]
    fn test_mean_with_negative_values() {
        let input = InputSequence::new(vec![-3, 3, -6]).unwrap();
        assert_eq!(mean(&input), -2.0);
    }

    #[test]
    fn test_run_blocking_waits_the_configured_delay() {
        let timer = RecordingTimer::default();
        let task = AverageTask::new(Duration::from_millis(250));
        let input = InputSequence::new(vec![2, 4]).unwrap();

        let result = task.run_blocking(&timer, &input, 7);

        assert_eq!(result, TaskResult { worker_id: 7, mean: 3.0 });
        assert_eq!(*timer.slept.lock().unwrap(), vec![Duration::from_millis(250)]);
    }

    #[tokio::test]
    async fn test_run_awaits_the_configured_delay() {
        let timer = RecordingTimer::default();
        let task = AverageTask::new(Duration::from_millis(40));
        let input = InputSequence::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();

        let result = task.run(&timer, &input, 0).await;

        assert_eq!(result.mean, 5.5);
        assert_eq!(*timer.slept.lock().unwrap(), vec![Duration::from_millis(40)]);
    }
}
