// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::{
    DemoConfig, DispatchError, Dispatcher, InputSequence, ParallelDispatcher, Strategy,
};
use execution_models_process_parallel::{ProcessDispatcher, ProcessRuntime, WorkerCommand};
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(300);

fn worker_command() -> WorkerCommand {
    WorkerCommand::new(env!("CARGO_BIN_EXE_process-parallel-worker"))
}

fn process_dispatcher(config: &DemoConfig, command: WorkerCommand) -> ProcessDispatcher {
    ParallelDispatcher::new(ProcessRuntime::new(config.task(), command))
}

#[test]
fn test_processes_compute_sample_means_in_input_order() {
    let config = DemoConfig::with_delay(DELAY);

    let report = process_dispatcher(&config, worker_command())
        .run(&config.inputs)
        .unwrap();

    assert_eq!(report.strategy, Strategy::ProcessParallel);
    assert_eq!(report.means(), vec![5.5, 6.0, 6.0]);
    let ids: Vec<usize> = report.results.iter().map(|r| r.worker_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_process_delays_overlap() {
    let config = DemoConfig::with_delay(DELAY);

    let report = process_dispatcher(&config, worker_command())
        .run(&config.inputs)
        .unwrap();

    assert!(report.elapsed >= DELAY);
    assert!(
        report.elapsed < DELAY * 3,
        "Process run took {:?}, expected well under three delays",
        report.elapsed
    );
}

#[test]
fn test_single_element_input_yields_the_element() {
    let config = DemoConfig::with_delay(Duration::from_millis(10));
    let inputs = vec![InputSequence::new(vec![21]).unwrap()];

    let results = process_dispatcher(&config, worker_command())
        .dispatch(&inputs)
        .unwrap();

    assert_eq!(results[0].mean, 21.0);
}

#[test]
fn test_missing_worker_program_fails_to_spawn() {
    let config = DemoConfig::with_delay(Duration::from_millis(10));
    let command = WorkerCommand::new("/nonexistent/process-parallel-worker");

    let err = process_dispatcher(&config, command)
        .run(&config.inputs)
        .unwrap_err();

    assert!(matches!(err, DispatchError::Spawn { worker_id: 0, .. }));
}

#[cfg(unix)]
#[test]
fn test_failing_worker_surfaces_exit_status() {
    let config = DemoConfig::with_delay(Duration::from_millis(10));
    let command = WorkerCommand::new("sh").arg("-c").arg("exit 3");

    let err = process_dispatcher(&config, command)
        .run(&config.inputs)
        .unwrap_err();

    match err {
        DispatchError::WorkerExited { worker_id, status } => {
            assert_eq!(worker_id, 0);
            assert_eq!(status.code(), Some(3));
        }
        other => panic!("Expected WorkerExited, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_garbled_reply_is_a_protocol_error() {
    let config = DemoConfig::with_delay(Duration::from_millis(10));
    let command = WorkerCommand::new("sh")
        .arg("-c")
        .arg("cat > /dev/null; echo not-json");

    let err = process_dispatcher(&config, command)
        .run(&config.inputs)
        .unwrap_err();

    assert!(matches!(err, DispatchError::Protocol { worker_id: 0, .. }));
}
