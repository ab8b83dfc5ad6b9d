// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Cooperative delay: suspends the calling task and lets the scheduler
/// resume other pending work until `duration` has passed.
#[async_trait::async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Blocking delay: occupies the calling thread for the whole `duration`.
pub trait BlockingTimer: Send + Sync {
    fn sleep(&self, duration: Duration);
}

pub struct ThreadSleepTimer;

impl BlockingTimer for ThreadSleepTimer {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
