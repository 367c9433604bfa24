//! Countdown to the event start.
//!
//! [`CountdownState::between`] is the pure breakdown of the time left.
//! [`Countdown`] owns the recurring tick: it recomputes the state once per
//! second and stops for good once the target has passed, leaving the last
//! computed state in place rather than clamping it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::MissedTickBehavior;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Time left until the event, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownState {
    /// All fields zero; shown before the first tick and at the target instant.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break down a non-negative number of milliseconds.
    pub fn from_remaining_ms(remaining_ms: u64) -> Self {
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: ((remaining_ms / MS_PER_HOUR) % 24) as u8,
            minutes: ((remaining_ms / MS_PER_MINUTE) % 60) as u8,
            seconds: ((remaining_ms / MS_PER_SECOND) % 60) as u8,
        }
    }

    /// Time left between `now_ms` and `target_ms` (both epoch milliseconds).
    ///
    /// Returns `None` once the target has passed.
    pub fn between(target_ms: i64, now_ms: i64) -> Option<Self> {
        let remaining = target_ms.checked_sub(now_ms)?;
        u64::try_from(remaining).ok().map(Self::from_remaining_ms)
    }

    /// Whole seconds represented by this state.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// Value of a single unit.
    pub fn get(&self, unit: TimerUnit) -> u64 {
        match unit {
            TimerUnit::Days => self.days,
            TimerUnit::Hours => u64::from(self.hours),
            TimerUnit::Minutes => u64::from(self.minutes),
            TimerUnit::Seconds => u64::from(self.seconds),
        }
    }

    /// Two-digit display strings.
    pub fn padded(&self) -> PaddedCountdown {
        PaddedCountdown {
            days: format!("{:02}", self.days),
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
        }
    }
}

/// Zero-padded countdown fields, as displayed.
///
/// Days keep all their digits once past 99.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedCountdown {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl PaddedCountdown {
    /// Display string of a single unit.
    pub fn get(&self, unit: TimerUnit) -> &str {
        match unit {
            TimerUnit::Days => &self.days,
            TimerUnit::Hours => &self.hours,
            TimerUnit::Minutes => &self.minutes,
            TimerUnit::Seconds => &self.seconds,
        }
    }
}

impl std::fmt::Display for PaddedCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Units shown by the countdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimerUnit {
    pub const ALL: [TimerUnit; 4] = [
        TimerUnit::Days,
        TimerUnit::Hours,
        TimerUnit::Minutes,
        TimerUnit::Seconds,
    ];

    /// Label under each number.
    pub fn label(&self) -> &'static str {
        match self {
            TimerUnit::Days => "days",
            TimerUnit::Hours => "hours",
            TimerUnit::Minutes => "minutes",
            TimerUnit::Seconds => "seconds",
        }
    }
}

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_ms(&self) -> i64 {
        self()
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// State was recomputed
    Updated(CountdownState),
    /// Target has passed; the ticker is finished
    Expired,
}

/// Recurring countdown towards a fixed target.
///
/// The ticker is a plain owned value. Whoever awaits [`Countdown::run`]
/// owns the interval; dropping that future cancels it.
#[derive(Debug)]
pub struct Countdown<C = SystemClock> {
    target_ms: i64,
    clock: C,
    state: CountdownState,
    expired: bool,
}

impl Countdown<SystemClock> {
    /// Countdown against the system clock.
    pub fn new(target_ms: i64) -> Self {
        Self::with_clock(target_ms, SystemClock)
    }
}

impl<C: Clock> Countdown<C> {
    /// Countdown against a custom clock.
    pub fn with_clock(target_ms: i64, clock: C) -> Self {
        Self {
            target_ms,
            clock,
            state: CountdownState::ZERO,
            expired: false,
        }
    }

    /// Last computed state.
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Whether the ticker has stopped.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Recompute once.
    ///
    /// After the first `Expired` the state is frozen and every later call
    /// returns `Expired` without reading the clock.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Expired;
        }

        match CountdownState::between(self.target_ms, self.clock.now_ms()) {
            Some(state) => {
                self.state = state;
                Tick::Updated(state)
            }
            None => {
                self.expired = true;
                Tick::Expired
            }
        }
    }

    /// Tick every [`TICK_PERIOD`] until the target passes.
    ///
    /// The first tick fires immediately. Returns the frozen final state.
    pub async fn run<F>(&mut self, mut on_tick: F) -> CountdownState
    where
        F: FnMut(CountdownState),
    {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match self.tick() {
                Tick::Updated(state) => on_tick(state),
                Tick::Expired => {
                    tracing::info!(
                        "Countdown reached its target, stopping at {}",
                        self.state.padded()
                    );
                    return self.state;
                }
            }
        }
    }
}
