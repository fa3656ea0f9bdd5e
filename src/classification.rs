//! # Numeric and classification helpers
//!
//! Small, pure functions shared by the CRS builders:
//!
//! - [`is_equal`] / [`is_different`] – tolerance based float comparison,
//! - [`is_triaxial`] – decides between an ellipsoid and a triaxial figure,
//! - [`compute_inverse_flattening`] – `1 / f` with `0` for a sphere,
//! - [`longitude_direction_from_rotation`] – ographic longitude sign from the rotation sense.
//!
//! All comparisons use [`EQUALITY_TOLERANCE`] unless stated otherwise.

use std::{fmt, str::FromStr};

use crate::{
    constants::{Meter, EQUALITY_TOLERANCE},
    iau_errors::IauWktError,
};

/// Rotation sense of a body as written in the IAU catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Direct,
    Retrograde,
}

impl Rotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Direct => "Direct",
            Rotation::Retrograde => "Retrograde",
        }
    }

    /// Ographic longitude direction implied by this rotation sense.
    pub fn longitude_direction(self) -> LongitudeDirection {
        match self {
            Rotation::Direct => LongitudeDirection::West,
            Rotation::Retrograde => LongitudeDirection::East,
        }
    }
}

impl FromStr for Rotation {
    type Err = IauWktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Direct" => Ok(Rotation::Direct),
            "Retrograde" => Ok(Rotation::Retrograde),
            _ => Err(IauWktError::UnrecognizedRotation(s.to_string())),
        }
    }
}

/// Direction in which longitudes are counted positively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudeDirection {
    East,
    West,
}

impl LongitudeDirection {
    /// Lower-case keyword used in the WKT axis declaration.
    pub fn as_str(&self) -> &'static str {
        match self {
            LongitudeDirection::East => "east",
            LongitudeDirection::West => "west",
        }
    }
}

impl fmt::Display for LongitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `true` when `|a - b| <= tolerance`.
pub fn is_equal_with(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// `true` when `a` and `b` are equal within [`EQUALITY_TOLERANCE`].
pub fn is_equal(a: f64, b: f64) -> bool {
    is_equal_with(a, b, EQUALITY_TOLERANCE)
}

/// Negation of [`is_equal`].
pub fn is_different(a: f64, b: f64) -> bool {
    !is_equal(a, b)
}

/// Returns `true` when the body must be modelled with a triaxial figure.
///
/// Only the semi-major axis is compared against the two other axes: a body whose
/// semi-major axis equals both `semi_minor` and `axis_b` is never triaxial, even
/// when those two differ from each other.
///
/// # Example
///
/// ```
/// use iau_wkt::classification::is_triaxial;
///
/// // oblate ellipsoid (Earth like)
/// assert!(!is_triaxial(6378137.0, 6356752.0, 6378137.0));
/// // Phobos
/// assert!(is_triaxial(13000.0, 9100.0, 11400.0));
/// ```
pub fn is_triaxial(semi_major: Meter, semi_minor: Meter, axis_b: Meter) -> bool {
    is_different(semi_major, semi_minor) && is_different(semi_major, axis_b)
}

/// Compute the inverse flattening `a / (a - c)` of a rotational ellipsoid.
///
/// Returns `0.0` for a sphere (zero flattening).
///
/// # Errors
///
/// [`IauWktError::DegenerateGeometry`] when `semi_major` is not a strictly positive
/// finite number.
pub fn compute_inverse_flattening(
    semi_major: Meter,
    semi_minor: Meter,
) -> Result<f64, IauWktError> {
    if !semi_major.is_finite() || semi_major <= 0.0 {
        return Err(IauWktError::DegenerateGeometry(semi_major));
    }

    let flattening = (semi_major - semi_minor) / semi_major;
    if is_different(flattening, 0.0) {
        Ok(1.0 / flattening)
    } else {
        Ok(0.0)
    }
}

/// Longitude direction of an ographic CRS given the catalogue rotation string.
///
/// `"Direct"` gives [`LongitudeDirection::West`], `"Retrograde"` gives
/// [`LongitudeDirection::East`]. There is no default.
pub fn longitude_direction_from_rotation(
    rotation: &str,
) -> Result<LongitudeDirection, IauWktError> {
    Ok(rotation.parse::<Rotation>()?.longitude_direction())
}

#[cfg(test)]
mod test_classification {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_is_equal() {
        assert!(is_equal(1.0, 1.0 + 1e-10));
        assert!(is_different(1.0, 1.0 + 1e-8));
        assert!(is_equal_with(10.0, 10.4, 0.5));
        assert!(!is_equal_with(10.0, 10.6, 0.5));
    }

    #[test]
    fn test_is_triaxial() {
        assert!(!is_triaxial(3396190.0, 3396190.0, 3396190.0));
        assert!(!is_triaxial(6378137.0, 6356752.0, 6378137.0));
        assert!(is_triaxial(13000.0, 9100.0, 11400.0));

        // axis_b vs semi_minor is never compared
        assert!(!is_triaxial(100.0, 100.0, 90.0));
        assert!(!is_triaxial(100.0, 90.0, 100.0));
    }

    #[test]
    fn test_inverse_flattening() {
        let inv_f = compute_inverse_flattening(6378137.0, 6356752.0).unwrap();
        assert_abs_diff_eq!(inv_f, 298.257, epsilon = 1e-2);

        let mars = compute_inverse_flattening(3396190.0, 3376200.0).unwrap();
        assert_abs_diff_eq!(mars, 169.8944472236118, epsilon = 1e-9);

        assert_eq!(compute_inverse_flattening(1737400.0, 1737400.0), Ok(0.0));
    }

    #[test]
    fn test_inverse_flattening_degenerate() {
        assert_eq!(
            compute_inverse_flattening(0.0, 10.0),
            Err(IauWktError::DegenerateGeometry(0.0))
        );
        assert_eq!(
            compute_inverse_flattening(-1.0, 10.0),
            Err(IauWktError::DegenerateGeometry(-1.0))
        );
        assert!(compute_inverse_flattening(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_longitude_direction() {
        assert_eq!(
            longitude_direction_from_rotation("Direct"),
            Ok(LongitudeDirection::West)
        );
        assert_eq!(
            longitude_direction_from_rotation("Retrograde"),
            Ok(LongitudeDirection::East)
        );
        assert_eq!(
            longitude_direction_from_rotation("Sideways"),
            Err(IauWktError::UnrecognizedRotation("Sideways".into()))
        );
        assert!(longitude_direction_from_rotation("direct").is_err());
        assert_eq!(LongitudeDirection::West.to_string(), "west");
    }
}
