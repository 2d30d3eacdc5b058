use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
