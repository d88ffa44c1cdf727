use crate::domain::model::{CardRecord, NamedLookup};
use crate::utils::error::Result;

/// Anything that can hand out card records: a bulk-data file, an API client, a cache.
pub trait CardSource: Send + Sync {
    fn named(&self, name: &str) -> Result<NamedLookup>;
    fn cards(&self) -> &[CardRecord];
}
