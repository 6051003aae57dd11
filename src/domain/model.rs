use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireState {
    Idle,
    Hired { since: DateTime<Utc> },
}

/// 車隊中的一台腳踏車。租借起始時間只存在於 `HireState::Hired` 內，
/// 因此「已出租 ⇔ 有起始時間」永遠成立。
#[derive(Debug, Clone, PartialEq)]
pub struct Bicycle {
    id: String,
    price_per_hour: f64,
    state: HireState,
}

impl Bicycle {
    pub fn new(id: impl Into<String>, price_per_hour: f64) -> Self {
        Self {
            id: id.into(),
            price_per_hour,
            state: HireState::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price_per_hour(&self) -> f64 {
        self.price_per_hour
    }

    pub fn is_hired(&self) -> bool {
        matches!(self.state, HireState::Hired { .. })
    }

    pub fn hire_started_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            HireState::Hired { since } => Some(since),
            HireState::Idle => None,
        }
    }

    pub(crate) fn set_state(&mut self, state: HireState) {
        self.state = state;
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BicycleSeed {
    pub id: String,
    pub price_per_hour: f64,
}

impl BicycleSeed {
    pub fn new(id: impl Into<String>, price_per_hour: f64) -> Self {
        Self {
            id: id.into(),
            price_per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub id: String,
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HireReceipt {
    pub id: String,
    pub price_per_hour: f64,
    pub started_at: DateTime<Utc>,
    pub returned_at: DateTime<Utc>,
    pub billed_minutes: i64,
    pub duration_hours: f64,
    pub cost: f64,
}
