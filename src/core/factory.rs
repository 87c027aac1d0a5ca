//! PcFactory - the one sanctioned way to build PC records
//!
//! Keeping creation behind a factory gives a single place for policy that
//! must apply to every record (tracing today; ID issuance or pooling later)
//! without touching call sites.

use std::sync::OnceLock;

use crate::core::entity::Entity;
use crate::core::set::UniqueCollection;
use crate::entities::pc::{InvalidRecordError, Pc};

/// Stateless factory for [`Pc`] records
#[derive(Debug, Default, Clone, Copy)]
pub struct PcFactory {
    _private: (),
}

static SHARED: OnceLock<PcFactory> = OnceLock::new();

impl PcFactory {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// The process-wide instance, created on first use
    pub fn shared() -> &'static PcFactory {
        SHARED.get_or_init(PcFactory::new)
    }

    /// Validate the raw field values and build a record
    pub fn create_record(
        &self,
        model: impl Into<String>,
        year: i32,
        manufacturer: impl Into<String>,
        components: impl Into<Option<UniqueCollection<String>>>,
    ) -> Result<Pc, InvalidRecordError> {
        match Pc::new(model, year, manufacturer, components) {
            Ok(pc) => {
                tracing::debug!(kind = Pc::KIND, record = %pc, "Record created");
                Ok(pc)
            }
            Err(e) => {
                tracing::warn!(
                    kind = Pc::KIND,
                    field = %e.field,
                    value = %e.value,
                    "Record rejected"
                );
                Err(e)
            }
        }
    }
}
