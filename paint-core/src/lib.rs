//! paint-core: snapshot history for the PaintJS drawing surface.
//!
//! Design rules:
//! - Snapshots are opaque and immutable; the history never decodes them.
//! - Committing a new snapshot discards everything reachable by redo.
//! - Undo pops the current state and reveals (but keeps) the one beneath it.
//! - Nothing in this crate knows about a UI toolkit.

pub mod history;
pub mod snapshot;

pub use history::{History, HistoryConfig, HistoryError, HistoryStatus};
pub use snapshot::{Snapshot, SnapshotError, BYTES_PER_PIXEL};
