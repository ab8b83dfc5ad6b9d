// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{Parser, Subcommand};
use execution_models_core::{init_logging, DemoConfig};
use execution_models_driver::Driver;
use execution_models_process_parallel::{run_worker, WorkerCommand};
use std::io;

const WORKER_SUBCOMMAND: &str = "worker";

#[derive(Parser)]
#[command(
    name = "execution-models",
    about = "Times the same averaging tasks under sequential, async, thread and process execution"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Child side of the process strategy; reads a request from stdin.
    #[command(name = "worker", hide = true)]
    Worker,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Worker) => {
            run_worker(io::stdin().lock(), io::stdout().lock())?;
        }
        None => {
            let worker = WorkerCommand::current_exe(WORKER_SUBCOMMAND)?;
            let driver = Driver::new(DemoConfig::default(), worker);
            if let Err(e) = driver.run(&mut io::stdout().lock()) {
                tracing::error!(error = %e, "run aborted");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
