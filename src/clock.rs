use chrono::{Local, NaiveDate};

/// Source of "today" for stay validation. Injected into the engine so tests
/// can pin a date instead of touching a process-wide clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date for deterministic evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn pinned(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
