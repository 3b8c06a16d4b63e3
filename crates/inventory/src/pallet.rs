//! Pallets: containers that own boxes and aggregate over them.

use chrono::NaiveDate;

use warehouse_core::{DomainError, DomainResult, Entity, PalletId};

use crate::cargo_box::CargoBox;
use crate::item::{Dimensions, Item};

/// Fixed weight added to every pallet for its hardware.
pub const HANDLING_SURCHARGE: f64 = 30.0;

/// Aggregate root: Pallet.
///
/// Weight, volume and expiry are computed from the current boxes on every
/// read; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Pallet {
    id: PalletId,
    dimensions: Dimensions,
    boxes: Vec<CargoBox>,
}

impl Pallet {
    /// Create an empty pallet.
    pub fn new(id: PalletId, dimensions: Dimensions) -> Self {
        Self {
            id,
            dimensions,
            boxes: Vec::new(),
        }
    }

    /// Boxes in the order they were added.
    pub fn boxes(&self) -> &[CargoBox] {
        &self.boxes
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Put a box on the pallet.
    ///
    /// Only the footprint (width and depth) is checked. Height is not, boxes
    /// stack.
    pub fn add_box(&mut self, cargo_box: CargoBox) -> DomainResult<()> {
        if cargo_box.width() > self.width() || cargo_box.depth() > self.depth() {
            tracing::debug!(
                pallet_id = %self.id,
                box_id = %cargo_box.id(),
                "box footprint exceeds pallet"
            );
            return Err(DomainError::BoxTooLarge {
                box_width: cargo_box.width(),
                box_depth: cargo_box.depth(),
                pallet_width: self.width(),
                pallet_depth: self.depth(),
            });
        }

        tracing::debug!(pallet_id = %self.id, box_id = %cargo_box.id(), "box added");
        self.boxes.push(cargo_box);
        Ok(())
    }

    /// Like [`Pallet::add_box`], for callers whose box may not exist.
    pub fn try_add_box(&mut self, cargo_box: Option<CargoBox>) -> DomainResult<()> {
        match cargo_box {
            Some(cargo_box) => self.add_box(cargo_box),
            None => Err(DomainError::MissingBox),
        }
    }
}

impl Entity for Pallet {
    type Id = PalletId;

    fn id(&self) -> PalletId {
        self.id
    }
}

impl Item for Pallet {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Earliest expiry among the boxes that have one.
    ///
    /// Boxes without an expiry date do not take part; the pallet has no
    /// expiry when it is empty or none of its boxes has one.
    fn expiry_date(&self) -> Option<NaiveDate> {
        self.boxes.iter().filter_map(|b| b.expiry_date()).min()
    }

    fn weight(&self) -> f64 {
        let boxes: f64 = self.boxes.iter().map(|b| b.weight()).sum();
        self.dimensions.base_weight() + boxes + HANDLING_SURCHARGE
    }

    fn volume(&self) -> f64 {
        let boxes: f64 = self.boxes.iter().map(|b| b.volume()).sum();
        self.dimensions.volume() + boxes
    }
}
