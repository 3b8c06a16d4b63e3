//! Read-only views over a set of pallets.
//!
//! Both views borrow the input and recompute on every call. Pallets without
//! an expiry date never appear in either view.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use warehouse_core::{Entity, PalletId};

use crate::item::Item;
use crate::pallet::Pallet;

/// Number of pallets in the freshness view unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Shown in place of a date for pallets without an expiry.
pub const NO_EXPIRY_LABEL: &str = "no expiry";

/// Pallets grouped by expiry date (earliest first), lightest first within a
/// group.
///
/// Pallets of equal weight within a group keep their input order.
pub fn grouped_by_expiry(pallets: &[Pallet]) -> Vec<&Pallet> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Pallet>> = BTreeMap::new();
    for pallet in pallets {
        if let Some(expiry) = pallet.expiry_date() {
            groups.entry(expiry).or_default().push(pallet);
        }
    }

    groups
        .into_values()
        .flat_map(|mut group| {
            group.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
            group
        })
        .collect()
}

/// The `n` pallets that expire last, smallest volume first.
///
/// Pallets sharing an expiry date are taken in input order.
pub fn top_by_expiry(pallets: &[Pallet], n: usize) -> Vec<&Pallet> {
    let mut dated: Vec<(NaiveDate, &Pallet)> = pallets
        .iter()
        .filter_map(|p| p.expiry_date().map(|expiry| (expiry, p)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut top: Vec<&Pallet> = dated.into_iter().take(n).map(|(_, p)| p).collect();
    top.sort_by(|a, b| a.volume().total_cmp(&b.volume()));
    top
}

/// Snapshot of the figures a display layer needs for one pallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalletSummary {
    pub id: PalletId,
    pub volume: f64,
    pub weight: f64,
    pub expiry: Option<NaiveDate>,
}

impl PalletSummary {
    /// `YYYY-MM-DD`, or [`NO_EXPIRY_LABEL`].
    pub fn expiry_label(&self) -> String {
        match self.expiry {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => NO_EXPIRY_LABEL.to_string(),
        }
    }
}

impl From<&Pallet> for PalletSummary {
    fn from(pallet: &Pallet) -> Self {
        Self {
            id: pallet.id(),
            volume: pallet.volume(),
            weight: pallet.weight(),
            expiry: pallet.expiry_date(),
        }
    }
}

pub fn summarize<'a>(pallets: impl IntoIterator<Item = &'a Pallet>) -> Vec<PalletSummary> {
    pallets.into_iter().map(PalletSummary::from).collect()
}
