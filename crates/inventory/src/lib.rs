//! Inventory domain module: boxes, pallets and the reports over them.
//!
//! This crate contains business rules only, implemented purely as
//! deterministic domain logic (no IO, no console, no storage).

pub mod cargo_box;
pub mod item;
pub mod pallet;
pub mod report;

pub use cargo_box::{CargoBox, SHELF_LIFE_DAYS};
pub use item::{Dimensions, Item};
pub use pallet::{HANDLING_SURCHARGE, Pallet};
pub use report::{
    DEFAULT_TOP_N, NO_EXPIRY_LABEL, PalletSummary, grouped_by_expiry, summarize, top_by_expiry,
};
