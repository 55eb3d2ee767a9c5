//! Unit tests for the task core.


use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::task::{domain::TaskId, ports::IdGenerator};

/// Clock that advances by one second on every reading.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(crate) fn new() -> Self {
        Self {
            base: Utc
                .with_ymd_and_hms(2025, 1, 2, 15, 4, 5)
                .single()
                .expect("valid base timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + TimeDelta::seconds(tick)
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrozenClock(pub(crate) DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Identifier generator yielding `task-1`, `task-2`, and so on.
#[derive(Debug, Default)]
pub(crate) struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> TaskId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        TaskId::parse(&format!("task-{n}")).expect("generated id is non-empty")
    }
}

/// Identifier generator that always returns the same identifier.
#[derive(Debug)]
pub(crate) struct ConstantIdGenerator(pub(crate) &'static str);

impl IdGenerator for ConstantIdGenerator {
    fn new_id(&self) -> TaskId {
        TaskId::parse(self.0).expect("constant id is non-empty")
    }
}
