//! Cutting plans for one-dimensional stock cutting.
//!
//! Cuts of required sizes are assigned to a sequence of stock bars by a greedy
//! largest-first heuristic with smallest-filler backfill.
//! The result is *not* guaranteed to use the minimum number of bars.

/// Entities to model the 1D cutting problem
pub mod entities;

/// Error type shared by all planning operations
pub mod error;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The greedy bar packer
pub mod packer;

/// Grouped per-bar summaries of a cutting plan
pub mod summary;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::PlanError;
#[doc(inline)]
pub use packer::{pack, plan_job, plan_jobs};
#[doc(inline)]
pub use summary::summarize;
