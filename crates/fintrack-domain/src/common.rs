//! Shared traits implemented by the tracker's entities.

use chrono::NaiveDate;
use uuid::Uuid;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Anything pinned to a single calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}
