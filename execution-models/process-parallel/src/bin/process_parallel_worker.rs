// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use execution_models_core::init_logging;
use execution_models_process_parallel::run_worker;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    run_worker(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
