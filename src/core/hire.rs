use crate::core::registry::FleetRegistry;
use crate::domain::model::{HireReceipt, HireState, RateEntry};
use crate::domain::ports::Clock;
use crate::utils::error::{HireError, Result};
use chrono::{DateTime, Utc};

/// 以整分鐘計費，捨去不足一分鐘的部分。時鐘倒退時視為零分鐘。
pub fn billable_minutes(started_at: DateTime<Utc>, returned_at: DateTime<Utc>) -> i64 {
    (returned_at - started_at).num_minutes().max(0)
}

/// 租借櫃台：持有車隊並依時鐘處理租借與歸還。
pub struct HireDesk<C: Clock> {
    registry: FleetRegistry,
    clock: C,
}

impl<C: Clock> HireDesk<C> {
    pub fn new(registry: FleetRegistry, clock: C) -> Self {
        Self { registry, clock }
    }

    pub fn registry(&self) -> &FleetRegistry {
        &self.registry
    }

    pub fn list_all(&self) -> Vec<RateEntry> {
        self.registry.list_all()
    }

    /// Idle → Hired. 回傳租借起始時間。
    pub fn hire(&mut self, id: &str) -> Result<DateTime<Utc>> {
        let bicycle = self
            .registry
            .find_mut(id)
            .ok_or_else(|| HireError::NotFound { id: id.to_string() })?;

        if bicycle.is_hired() {
            return Err(HireError::AlreadyHired { id: id.to_string() });
        }

        let since = self.clock.now();
        bicycle.set_state(HireState::Hired { since });
        tracing::info!("🚲 Bicycle {} hired at {}", id, since);

        Ok(since)
    }

    /// Hired → Idle. 只讀一次時鐘，時長與費用皆由同一個時間點算出。
    pub fn return_bicycle(&mut self, id: &str) -> Result<HireReceipt> {
        let bicycle = self
            .registry
            .find_mut(id)
            .ok_or_else(|| HireError::NotFound { id: id.to_string() })?;

        let started_at = bicycle
            .hire_started_at()
            .ok_or_else(|| HireError::NotHired { id: id.to_string() })?;

        let returned_at = self.clock.now();
        let billed_minutes = billable_minutes(started_at, returned_at);
        let duration_hours = billed_minutes as f64 / 60.0;
        let cost = duration_hours * bicycle.price_per_hour();

        bicycle.set_state(HireState::Idle);
        tracing::info!(
            "✅ Bicycle {} returned after {:.2}h, cost {:.2}",
            id,
            duration_hours,
            cost
        );

        Ok(HireReceipt {
            id: bicycle.id().to_string(),
            price_per_hour: bicycle.price_per_hour(),
            started_at,
            returned_at,
            billed_minutes,
            duration_hours,
            cost,
        })
    }
}
