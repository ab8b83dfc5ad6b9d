// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod tokio_timer;
pub use tokio_timer::TokioTimer;

mod cooperative_dispatcher;
pub use cooperative_dispatcher::CooperativeDispatcher;
