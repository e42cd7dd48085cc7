//! Timer helpers backing the gallery autoplay and the dialog focus delay.

use time::{Date, OffsetDateTime};

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Today's calendar date in UTC (the same day an ISO timestamp would show).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
