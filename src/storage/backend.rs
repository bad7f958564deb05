//! Record source abstraction.
//!
//! This module defines the [`RecordSource`] trait that abstracts over where the
//! initiative catalog comes from. The dashboard only ever needs one operation:
//! read the whole catalog once at startup.

use crate::domain::error::Result;
use crate::domain::Initiative;

/// Abstraction over catalog sources.
///
/// Implementations validate what they hand out: malformed records, duplicate
/// ids and an empty catalog are reported here, at load time, so that the
/// record store and everything downstream can assume well-formed data.
///
/// # Implementations
///
/// - [`JsonSource`](crate::storage::JsonSource): a JSON array of records
///
/// # Examples
///
/// ```no_run
/// use cohesivegov::storage::{JsonSource, RecordSource};
///
/// let source = JsonSource::from_path("data/initiatives.json");
/// let records = source.load_records()?;
/// # Ok::<(), cohesivegov::DashboardError>(())
/// ```
pub trait RecordSource {
    /// Human-readable description of where records come from, used in logs and
    /// error messages.
    fn describe(&self) -> String;

    /// Reads every record, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, is not a catalog, holds
    /// no record, holds a malformed record, or repeats an id.
    fn load_records(&self) -> Result<Vec<Initiative>>;
}
