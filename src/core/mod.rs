pub mod card;
pub mod colors;
pub mod layout;
pub mod summary;

pub use crate::domain::model::{CardRecord, Field, NamedLookup};
pub use crate::domain::ports::CardSource;
pub use crate::utils::error::Result;
