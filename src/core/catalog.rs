//! Catalog - the set of PCs a session has recorded

use crate::core::factory::PcFactory;
use crate::core::set::UniqueCollection;
use crate::entities::pc::{InvalidRecordError, Pc};
use crate::report;

/// PCs recorded in one session, created through a factory and kept unique
#[derive(Debug, Default)]
pub struct Catalog {
    factory: PcFactory,
    records: UniqueCollection<Pc>,
}

impl Catalog {
    pub fn new(factory: PcFactory) -> Self {
        Self {
            factory,
            records: UniqueCollection::new(),
        }
    }

    /// Create a record from raw field values and add it
    ///
    /// Returns `Ok(false)` when an equal PC was already recorded.
    pub fn add(
        &mut self,
        model: impl Into<String>,
        year: i32,
        manufacturer: impl Into<String>,
        components: impl Into<Option<UniqueCollection<String>>>,
    ) -> Result<bool, InvalidRecordError> {
        let pc = self
            .factory
            .create_record(model, year, manufacturer, components)?;
        let added = self.records.insert(pc);
        if added {
            tracing::info!(size = self.records.size(), "Record added to catalog");
        } else {
            tracing::debug!("Duplicate record ignored");
        }
        Ok(added)
    }

    pub fn size(&self) -> usize {
        self.records.size()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &UniqueCollection<Pc> {
        &self.records
    }

    /// Render the text report, or `None` when nothing was recorded
    pub fn report(&self) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        Some(report::render(&self.records.snapshot()))
    }
}
