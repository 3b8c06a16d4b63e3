//! Boxes: leaf items with optional production/expiry dates.

use chrono::{Days, NaiveDate};

use warehouse_core::{BoxId, DomainError, DomainResult, Entity};

use crate::item::{Dimensions, Item};

/// Shelf life applied when only the production date is known.
pub const SHELF_LIFE_DAYS: u64 = 100;

/// A box. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoBox {
    id: BoxId,
    dimensions: Dimensions,
    production_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
}

impl CargoBox {
    /// Build a box.
    ///
    /// An explicit `expiry_date` wins; otherwise it is derived as
    /// `production_date + SHELF_LIFE_DAYS`. With neither date the box has no
    /// expiry.
    pub fn new(
        id: BoxId,
        dimensions: Dimensions,
        expiry_date: Option<NaiveDate>,
        production_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let expiry_date = match (expiry_date, production_date) {
            (Some(expiry), _) => Some(expiry),
            (None, Some(production)) => Some(
                production
                    .checked_add_days(Days::new(SHELF_LIFE_DAYS))
                    .ok_or(DomainError::DateOutOfRange { production })?,
            ),
            (None, None) => None,
        };

        if let (Some(production), Some(expiry)) = (production_date, expiry_date)
            && production > expiry
        {
            return Err(DomainError::InvalidDateRange { production, expiry });
        }

        Ok(Self {
            id,
            dimensions,
            production_date,
            expiry_date,
        })
    }

    pub fn production_date(&self) -> Option<NaiveDate> {
        self.production_date
    }
}

impl Entity for CargoBox {
    type Id = BoxId;

    fn id(&self) -> BoxId {
        self.id
    }
}

impl Item for CargoBox {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }
}
