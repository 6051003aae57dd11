use crate::domain::model::{Bicycle, BicycleSeed, RateEntry};

/// 唯一持有所有 `Bicycle` 的車隊清單，保持插入順序。
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    bicycles: Vec<Bicycle>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: &[BicycleSeed]) -> Self {
        let mut registry = Self::new();
        registry.initialize(seeds);
        registry
    }

    /// 以給定的車隊取代目前內容，所有車輛皆為閒置
    pub fn initialize(&mut self, seeds: &[BicycleSeed]) {
        self.bicycles = seeds
            .iter()
            .map(|seed| Bicycle::new(seed.id.clone(), seed.price_per_hour))
            .collect();
        tracing::debug!("Fleet initialized with {} bicycles", self.bicycles.len());
    }

    pub fn find(&self, id: &str) -> Option<&Bicycle> {
        self.bicycles.iter().find(|bicycle| bicycle.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Bicycle> {
        self.bicycles.iter_mut().find(|bicycle| bicycle.id() == id)
    }

    pub fn list_all(&self) -> Vec<RateEntry> {
        self.bicycles
            .iter()
            .map(|bicycle| RateEntry {
                id: bicycle.id().to_string(),
                price_per_hour: bicycle.price_per_hour(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bicycle> {
        self.bicycles.iter()
    }

    pub fn len(&self) -> usize {
        self.bicycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bicycles.is_empty()
    }
}
