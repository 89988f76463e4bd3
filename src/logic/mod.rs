//! Pure view-engine functions over the pantry collection.
//!
//! Everything in here reads item data and view state and produces derived
//! values for rendering. Nothing mutates the store.

pub mod filter;
pub mod rows;
pub mod safety;
pub mod sort;
pub mod status;
pub mod suggest;

pub use filter::filter_items;
pub use rows::{RowViewModel, build_rows};
pub use safety::{is_high_risk, safety_label};
pub use sort::sort_items;
pub use status::{RowStatus, SlotTag, classify};
pub use suggest::suggest;
