use async_trait::async_trait;
use common::RawEmissionsRecord;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::HistoricalDataSource;
use crate::error::Result;

/// In-memory stand-in for the remote emissions service.
///
/// Every entity receives the default records unless it was registered with
/// its own.
#[derive(Debug, Clone)]
pub struct FixtureHistorySource {
    default_records: Vec<RawEmissionsRecord>,
    entities: HashMap<String, Vec<RawEmissionsRecord>>,
}

impl Default for FixtureHistorySource {
    /// Two observed years: 500 t in 2019 and 230 t in 2020.
    fn default() -> Self {
        Self::new(vec![
            RawEmissionsRecord::new("2019", 500.0),
            RawEmissionsRecord::new("2020", 230.0),
        ])
    }
}

impl FixtureHistorySource {
    /// Creates a source returning `default_records` for every entity.
    pub fn new(default_records: Vec<RawEmissionsRecord>) -> Self {
        Self {
            default_records,
            entities: HashMap::new(),
        }
    }

    /// Registers records for one entity.
    pub fn with_entity(mut self, entity_id: impl Into<String>, records: Vec<RawEmissionsRecord>) -> Self {
        self.entities.insert(entity_id.into(), records);
        self
    }
}

#[async_trait]
impl HistoricalDataSource for FixtureHistorySource {
    #[instrument(skip(self))]
    async fn fetch_history(
        &self,
        entity_id: &str,
        baseline_year: i32,
    ) -> Result<Vec<RawEmissionsRecord>> {
        let records = self
            .entities
            .get(entity_id)
            .unwrap_or(&self.default_records)
            .clone();
        debug!("Fixture returned {} records for entity {}", records.len(), entity_id);
        Ok(records)
    }
}
