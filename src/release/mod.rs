//! Channel selection and index publishing
//!
//! # Core Invariants
//!
//! 1. **Only the newest matching version is selected**
//!    - Versions are scanned in precedence order, newest first
//!    - The first entry tagged with the requested channel wins
//!
//! 2. **Stable is a per-component boundary**
//!    - Once a stable version is seen, no older pre-release is eligible
//!    - Components without an eligible version get no index entry
//!
//! 3. **Nothing is written or deleted without confirmation**
//!    - Both the index writer and the pruner preview their effect first
//!    - A decline is a successful no-op
//!
//! # Architecture
//!
//! - **channel**: `Channel` (stable or a named pre-release tag)
//! - **selector**: maps a registry export onto a `ChannelSelection`
//! - **index**: writes `<channel>.json` into the storage root
//! - **prune**: deletes the files backing a selection

pub mod channel;
pub mod index;
pub mod prune;
pub mod selector;

pub use channel::Channel;
pub use index::IndexWriter;
pub use prune::IndexPruner;
pub use selector::{ChannelSelection, ResolveMode, select_channel_versions};

/// Result of a confirmation-gated mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The operator confirmed and the side effect completed
  Applied,
  /// The operator declined; nothing was written or deleted
  Aborted,
}
