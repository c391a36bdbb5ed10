/// Observable outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One second elapsed and time is still left.
    Tick { remaining: u32 },
    /// The countdown just reached zero.
    Expired,
}

/// A single restartable countdown measured in whole seconds.
///
/// The countdown does not own a clock. Callers deliver ticks (one per elapsed
/// interval) and the countdown reports what happened. Every `reset` bumps a
/// generation counter so ticks scheduled against an earlier reset can be
/// recognised and dropped with `tick_for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    generation: u64,
}

impl Countdown {
    /// Creates a countdown armed at `duration` seconds.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: duration,
            generation: 0,
        }
    }

    /// Restarts the countdown from `duration`, invalidating in-flight ticks.
    pub fn reset(&mut self, duration: u32) {
        self.remaining = duration;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Applies one tick.
    ///
    /// Returns `None` once the countdown sits at zero; expiry is reported
    /// exactly once per reset.
    pub fn tick(&mut self) -> Option<CountdownEvent> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Some(CountdownEvent::Expired)
        } else {
            Some(CountdownEvent::Tick {
                remaining: self.remaining,
            })
        }
    }

    /// Applies one tick scheduled for `generation`; stale ticks are ignored.
    pub fn tick_for(&mut self, generation: u64) -> Option<CountdownEvent> {
        if generation != self.generation {
            return None;
        }
        self.tick()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
