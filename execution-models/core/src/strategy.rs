// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    CooperativeAsync,
    ThreadParallel,
    ProcessParallel,
}

impl Strategy {
    /// Fixed order in which the driver runs the strategies.
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::CooperativeAsync,
        Strategy::ThreadParallel,
        Strategy::ProcessParallel,
    ];

    /// Name printed in front of the elapsed time.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential programming",
            Strategy::CooperativeAsync => "Asynchronous programming",
            Strategy::ThreadParallel => "Threading programming",
            Strategy::ProcessParallel => "Multiprocessing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
