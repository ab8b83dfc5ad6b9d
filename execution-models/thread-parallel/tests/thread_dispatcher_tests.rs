// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::{
    BlockingTimer, DemoConfig, DispatchError, Dispatcher, InputSequence, ParallelDispatcher,
    Strategy,
};
use execution_models_sequential::SequentialDispatcher;
use execution_models_thread_parallel::{ThreadDispatcher, ThreadRuntime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(200);

fn thread_dispatcher(config: &DemoConfig) -> ThreadDispatcher {
    ParallelDispatcher::new(ThreadRuntime::new(config.task()))
}

/// Panics on the first call, sleeps normally afterwards.
struct FirstCallPanics {
    calls: Arc<AtomicUsize>,
}

impl BlockingTimer for FirstCallPanics {
    fn sleep(&self, duration: Duration) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("simulated latency failed");
        }
        std::thread::sleep(duration);
    }
}

#[test]
fn test_threads_compute_sample_means_in_input_order() {
    let config = DemoConfig::with_delay(DELAY);

    let report = thread_dispatcher(&config).run(&config.inputs).unwrap();

    assert_eq!(report.strategy, Strategy::ThreadParallel);
    assert_eq!(report.means(), vec![5.5, 6.0, 6.0]);
}

#[test]
fn test_thread_delays_overlap() {
    let config = DemoConfig::with_delay(DELAY);

    let report = thread_dispatcher(&config).run(&config.inputs).unwrap();

    assert!(report.elapsed >= DELAY);
    assert!(
        report.elapsed < DELAY * 2,
        "Thread run took {:?}, expected about {:?}",
        report.elapsed,
        DELAY
    );
}

#[test]
fn test_threads_beat_sequential() {
    let config = DemoConfig::with_delay(DELAY);

    let sequential = SequentialDispatcher::new(config.task())
        .run(&config.inputs)
        .unwrap();
    let threaded = thread_dispatcher(&config).run(&config.inputs).unwrap();

    assert!(threaded.elapsed < sequential.elapsed);
    assert_eq!(threaded.means(), sequential.means());
}

#[test]
fn test_worker_panic_surfaces_at_join() {
    let config = DemoConfig::with_delay(Duration::from_millis(20));
    let calls = Arc::new(AtomicUsize::new(0));
    let runtime = ThreadRuntime::with_timer(
        config.task(),
        FirstCallPanics {
            calls: calls.clone(),
        },
    );
    let dispatcher = ParallelDispatcher::new(runtime);

    let err = dispatcher.run(&config.inputs).unwrap_err();

    assert!(matches!(err, DispatchError::WorkerPanicked { .. }));
    // every worker was started and reached its delay before the dispatcher returned
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_single_element_input_yields_the_element() {
    let config = DemoConfig::with_delay(Duration::from_millis(10));
    let inputs = vec![InputSequence::new(vec![13]).unwrap()];

    let results = thread_dispatcher(&config).dispatch(&inputs).unwrap();

    assert_eq!(results[0].mean, 13.0);
}
