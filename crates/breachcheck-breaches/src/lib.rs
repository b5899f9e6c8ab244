//! BreachCheck Breaches - normalization and aggregation of breach records.
//!
//! Raw API objects are normalized into immutable [`BreachRecord`]s, sorted
//! newest first, and optionally reduced to a [`BreachSummary`].
//!
//! ```text
//! HibpClient → Vec<RawBreach> → normalize → sort (newest first) → Vec<BreachRecord>
//!                                                                   ↓
//!                                                     build_summary (oldest first)
//! ```
//!
//! The result list and the summary use independent orderings: the list is
//! sorted descending by date, while the summary sorts its own copy
//! ascending to pick the earliest and latest breach.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod checker;
pub mod normalize;
pub mod record;
pub mod summary;

// Re-export commonly used types
pub use checker::{sort_newest_first, BreachChecker};
pub use normalize::{normalize, UNKNOWN};
pub use record::BreachRecord;
pub use summary::{build_summary, BreachSummary};
