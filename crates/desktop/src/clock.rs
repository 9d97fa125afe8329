//! Source of "today" for sale registration.

use std::sync::{Arc, RwLock};

use maloka_core::SaleDay;

pub trait Clock: Send + Sync {
    fn today(&self) -> SaleDay;
}

impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn today(&self) -> SaleDay {
        (**self).today()
    }
}

/// Local calendar date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> SaleDay {
        SaleDay::today()
    }
}

/// A settable clock for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    day: RwLock<SaleDay>,
}

impl FixedClock {
    pub fn new(day: SaleDay) -> Self {
        Self {
            day: RwLock::new(day),
        }
    }

    pub fn set(&self, day: SaleDay) {
        if let Ok(mut current) = self.day.write() {
            *current = day;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> SaleDay {
        match self.day.read() {
            Ok(day) => *day,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
