// Shared fixtures for the oracle integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use cambio::{Oracle, OracleBuilder};
use cambio_core::{FixedClock, RuleTable};
use cambio_mock::{CallLog, MockConnector};
use chrono::{TimeZone, Utc};

pub const AR: &str = "cambio-mock-ar";
pub const BO: &str = "cambio-mock-bo";
pub const WORLD: &str = "cambio-mock-world";
pub const CRYPTO: &str = "cambio-mock-crypto";

pub const STAMP: &str = "2024-05-01T12:30:05Z";

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap(),
    ))
}

/// Connectors for one run, all recording into the same log.
pub struct Sources {
    pub ar: MockConnector,
    pub bo: MockConnector,
    pub world: MockConnector,
    pub crypto: Option<MockConnector>,
}

impl Sources {
    pub fn fixtures() -> Self {
        Self {
            ar: MockConnector::argentina(),
            bo: MockConnector::bolivia(),
            world: MockConnector::world(),
            crypto: Some(MockConnector::crypto()),
        }
    }

    pub fn builder(self, log: &CallLog) -> OracleBuilder {
        let b = Oracle::builder()
            .local_source(
                "argentina",
                Arc::new(self.ar.logging_to(log)),
                RuleTable::argentina(),
            )
            .local_source(
                "bolivia",
                Arc::new(self.bo.logging_to(log)),
                RuleTable::bolivia(),
            )
            .world_rates(Arc::new(self.world.logging_to(log)))
            .clock(clock());
        match self.crypto {
            Some(c) => b.crypto_tickers(Arc::new(c.logging_to(log))),
            None => b,
        }
    }

    pub fn oracle(self, log: &CallLog) -> Oracle {
        self.builder(log).build().unwrap()
    }
}

pub fn call(name: &str, role: &str) -> String {
    format!("{name}:{role}")
}

pub fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}
