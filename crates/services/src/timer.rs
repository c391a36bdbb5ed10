//! Real-time driver for a countdown.

use std::time::Duration;

use quiz_core::CountdownEvent;

/// Wall-clock time between two countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Deliver a tick every `period` until the countdown expires or stops accepting ticks.
///
/// `on_tick` is called after each full period. The loop ends on
/// `CountdownEvent::Expired` or when `on_tick` returns `None` (the tick was
/// stale or the quiz left the in-progress phase). Dropping or aborting the
/// future cancels the pending tick.
pub async fn run_countdown<F>(period: Duration, mut on_tick: F)
where
    F: FnMut() -> Option<CountdownEvent>,
{
    loop {
        tokio::time::sleep(period).await;
        match on_tick() {
            Some(CountdownEvent::Tick { .. }) => {}
            Some(CountdownEvent::Expired) | None => break,
        }
    }
}
