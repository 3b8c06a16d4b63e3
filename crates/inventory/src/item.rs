//! Shared geometry/weight capability of boxes and pallets.

use chrono::NaiveDate;

use warehouse_core::{DomainError, DomainResult, Entity, ValueObject};

/// Validated width/height/depth and base weight.
///
/// All four values are finite and strictly positive for the lifetime of the
/// value; there is no way to build a `Dimensions` that violates this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
    depth: f64,
    base_weight: f64,
}

impl Dimensions {
    /// Validate and build.
    ///
    /// Dimensions are checked before the weight, so an input with both a bad
    /// depth and a bad weight reports `InvalidDimension`.
    pub fn new(width: f64, height: f64, depth: f64, base_weight: f64) -> DomainResult<Self> {
        ensure_dimension("width", width)?;
        ensure_dimension("height", height)?;
        ensure_dimension("depth", depth)?;
        if !is_positive(base_weight) {
            return Err(DomainError::invalid_weight(base_weight));
        }

        Ok(Self {
            width,
            height,
            depth,
            base_weight,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

impl ValueObject for Dimensions {}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn ensure_dimension(dimension: &'static str, value: f64) -> DomainResult<()> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(DomainError::invalid_dimension(dimension, value))
    }
}

/// Anything with a footprint, a weight and a volume.
///
/// The defaults describe a plain item; containers override `weight` and
/// `volume` to aggregate over their contents.
pub trait Item: Entity {
    fn dimensions(&self) -> &Dimensions;

    /// Earliest date the item's contents go off, if known.
    fn expiry_date(&self) -> Option<NaiveDate>;

    fn width(&self) -> f64 {
        self.dimensions().width()
    }

    fn height(&self) -> f64 {
        self.dimensions().height()
    }

    fn depth(&self) -> f64 {
        self.dimensions().depth()
    }

    fn weight(&self) -> f64 {
        self.dimensions().base_weight()
    }

    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_product_of_sides() {
        let dims = Dimensions::new(2.0, 3.0, 4.0, 1.0).unwrap();
        assert_eq!(dims.volume(), 24.0);
        assert_eq!(dims.base_weight(), 1.0);
    }

    #[test]
    fn zero_height_is_rejected() {
        let err = Dimensions::new(1.0, 0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_dimension("height", 0.0));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = Dimensions::new(1.0, 1.0, 1.0, -3.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_weight(-3.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            Dimensions::new(f64::NAN, 1.0, 1.0, 1.0),
            Err(DomainError::InvalidDimension { dimension: "width", .. })
        ));
        assert!(matches!(
            Dimensions::new(1.0, 1.0, f64::INFINITY, 1.0),
            Err(DomainError::InvalidDimension { dimension: "depth", .. })
        ));
        assert!(matches!(
            Dimensions::new(1.0, 1.0, 1.0, f64::INFINITY),
            Err(DomainError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn dimension_errors_take_precedence_over_weight() {
        let err = Dimensions::new(1.0, 1.0, -1.0, -1.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDimension { dimension: "depth", .. }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: valid input always builds, and volume is exactly w*h*d.
            #[test]
            fn valid_dimensions_build(
                w in 0.001f64..1.0e4,
                h in 0.001f64..1.0e4,
                d in 0.001f64..1.0e4,
                weight in 0.001f64..1.0e4,
            ) {
                let dims = Dimensions::new(w, h, d, weight).unwrap();
                prop_assert_eq!(dims.volume(), w * h * d);
                prop_assert_eq!(dims.base_weight(), weight);
            }

            /// Property: a single non-positive side is always rejected.
            #[test]
            fn non_positive_side_is_rejected(
                bad in -1.0e4f64..=0.0,
                which in 0usize..3,
            ) {
                let mut sides = [1.0, 1.0, 1.0];
                sides[which] = bad;
                let result = Dimensions::new(sides[0], sides[1], sides[2], 1.0);
                let is_dimension_error = matches!(result, Err(DomainError::InvalidDimension { .. }));
                prop_assert!(is_dimension_error);
            }

            /// Property: a non-positive weight is always rejected.
            #[test]
            fn non_positive_weight_is_rejected(bad in -1.0e4f64..=0.0) {
                let result = Dimensions::new(1.0, 1.0, 1.0, bad);
                prop_assert_eq!(result, Err(DomainError::invalid_weight(bad)));
            }
        }
    }
}
