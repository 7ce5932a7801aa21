//! Angle newtypes and radian arithmetic.
//!
//! [`Radians`] and [`Degrees`] are kept as distinct types so a degree value
//! can never reach code that expects radians. Conversions are explicit.
//!
//! Canonical radian values live in `[0, 2π)`; [`add`] and [`median`] always
//! return a normalized angle.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{median_in_place, Real};

/// An angle in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub Real);

/// An angle in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub Real);

impl Radians {
    #[inline]
    pub fn value(self) -> Real {
        self.0
    }

    /// Equivalent angle in `[0, 2π)`.
    #[inline]
    pub fn normalized(self) -> Radians {
        normalize(self.0)
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Degrees {
    #[inline]
    pub fn value(self) -> Real {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// Reduce `radians` into `[0, 2π)`.
///
/// Negative inputs wrap around from `2π`. A remainder that rounds up to
/// exactly `2π` (tiny negative inputs) folds to `0`. NaN stays NaN.
pub fn normalize(radians: Real) -> Radians {
    let r = radians.rem_euclid(TAU);
    if r >= TAU {
        Radians(0.0)
    } else {
        Radians(r)
    }
}

/// Sum of two angles, normalized.
pub fn add(a: Radians, b: Radians) -> Radians {
    normalize(a.0 + b.0)
}

/// Median of a set of optional angles.
///
/// Missing and non-finite entries are discarded. The remaining values are sorted
/// numerically, not around the circle, so inputs straddling `0`/`2π` give a
/// median near `π` (e.g. `[0.1, 6.2]` → `3.15`). Returns `None` when nothing
/// is left.
pub fn median<I>(angles: I) -> Option<Radians>
where
    I: IntoIterator<Item = Option<Radians>>,
{
    let mut values: Vec<Real> = angles
        .into_iter()
        .flatten()
        .map(Radians::value)
        .filter(|v| v.is_finite())
        .collect();

    match median_in_place(&mut values) {
        Some(m) => Some(normalize(m)),
        None => {
            log::debug!("angle median: no usable angles");
            None
        }
    }
}

/// Compare two optional angles after normalization.
///
/// Two absent angles are considered equal; an absent and a present angle are
/// not.
pub fn same_direction(a: Option<Radians>, b: Option<Radians>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.normalized() == b.normalized(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn normalize_stays_in_range() {
        let inputs = [
            0.0,
            1.0,
            -1.0,
            TAU,
            -TAU,
            3.0 * TAU + 0.25,
            -7.5 * PI,
            -1e-20,
            1e9,
            -1e9,
            f64::MAX,
            f64::MIN,
        ];
        for x in inputs {
            let r = normalize(x).value();
            assert!((0.0..TAU).contains(&r), "normalize({x}) = {r} out of range");
        }
    }

    #[test]
    fn normalize_wraps_negative_values() {
        let r = normalize(-PI / 2.0).value();
        assert!((r - 1.5 * PI).abs() < 1e-12, "r={r}");
        assert_eq!(normalize(TAU).value(), 0.0);
    }

    #[test]
    fn add_wraps_past_full_turn() {
        let r = add(Radians(1.5 * PI), Radians(PI)).value();
        assert!((r - 0.5 * PI).abs() < 1e-12, "r={r}");
    }

    #[test]
    fn median_is_numeric_not_circular() {
        let m = median([Some(Radians(0.1)), Some(Radians(6.2))]).unwrap();
        // (0.1 + 6.2) / 2, already inside [0, 2π)
        assert!((m.value() - 3.15).abs() < 1e-12, "m={m:?}");
    }

    #[test]
    fn median_skips_missing_and_nan() {
        let m = median([
            None,
            Some(Radians(f64::NAN)),
            Some(Radians(1.0)),
            Some(Radians(3.0)),
            Some(Radians(2.0)),
        ])
        .unwrap();
        assert_eq!(m, Radians(2.0));
    }

    #[test]
    fn median_normalizes_result() {
        let m = median([Some(Radians(7.0))]).unwrap();
        assert!((m.value() - (7.0 - TAU)).abs() < 1e-12);
    }

    #[test]
    fn median_of_nothing_usable_is_none() {
        assert_eq!(median([None, Some(Radians(f64::NAN))]), None);
        assert_eq!(median(std::iter::empty()), None);
    }

    #[test]
    fn median_skips_infinite_angles() {
        assert_eq!(median([Some(Radians(f64::INFINITY))]), None);
        let m = median([
            Some(Radians(f64::NEG_INFINITY)),
            Some(Radians(0.4)),
            Some(Radians(f64::INFINITY)),
        ]);
        assert_eq!(m, Some(Radians(0.4)));
    }

    #[test]
    fn same_direction_uses_normalized_values() {
        assert!(same_direction(Some(Radians(-PI)), Some(Radians(PI))));
        assert!(same_direction(None, None));
        assert!(!same_direction(Some(Radians(0.0)), None));
        assert!(!same_direction(Some(Radians(0.0)), Some(Radians(0.1))));
    }

    #[test]
    fn degree_radian_conversion() {
        let r = Degrees(180.0).to_radians();
        assert!((r.value() - PI).abs() < 1e-15);
        assert!((Radians(PI / 2.0).to_degrees().value() - 90.0).abs() < 1e-12);
    }
}
