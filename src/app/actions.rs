//! Side effects requested by the event handler.
//!
//! The handler itself never touches the filesystem or the terminal. It
//! returns [`Action`]s and the host (the CLI in `main.rs`) executes them in
//! order.

use crate::export::ExportPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Persists an export. `payload.file_name` is relative to the host's
    /// export directory.
    WriteExport(ExportPayload),

    /// Tells the host an event referred to a record that does not exist.
    ///
    /// Not an error: the host decides whether to report it.
    RecordNotFound {
        id: String,
    },
}
