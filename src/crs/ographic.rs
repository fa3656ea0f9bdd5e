//! Planetographic CRS builder.
//!
//! The longitude of an ographic CRS follows the rotation sense of the body
//! (direct rotation → west-positive). The CRS is **not** created when:
//!
//! 1. the catalogue gives no rotation sense ([`ForbiddenRule::Rule1`]),
//! 2. the body is the Sun or the Moon, which use east-positive longitudes by usage
//!    ([`ForbiddenRule::Rule2`]),
//! 3. the body is a sphere with a retrograde rotation, whose ographic CRS would be
//!    the same as its ocentric one ([`ForbiddenRule::Rule3`]).
//!
//! Those cases are reported as [`IauWktError::OgraphicForbidden`], which callers are
//! expected to handle by simply skipping the ographic branch.

use tracing::debug;

use crate::{
    classification::{
        compute_inverse_flattening, is_equal, is_triaxial, longitude_direction_from_rotation,
        Rotation,
    },
    constants::{OGRAPHIC_OFFSET, TRIAXIAL_OGRAPHIC_NOMINAL_RADIUS},
    iau_errors::{ForbiddenRule, IauWktError},
    record::PhysicalRecord,
};

use super::{body_gis_code, CrsDescriptor, CrsNames, Ellipsoid, Triaxial};

const EAST_BY_USAGE: [&str; 2] = ["SUN", "MOON"];

fn forbidden_rule(record: &PhysicalRecord) -> Result<Option<ForbiddenRule>, IauWktError> {
    let Some(rotation) = record.rotation.as_deref() else {
        return Ok(Some(ForbiddenRule::Rule1));
    };

    if EAST_BY_USAGE.contains(&record.body.to_uppercase().as_str()) {
        return Ok(Some(ForbiddenRule::Rule2));
    }

    let inverse_flattening = compute_inverse_flattening(record.semi_major, record.semi_minor)?;
    if is_equal(inverse_flattening, 0.0) && rotation == Rotation::Retrograde.as_str() {
        return Ok(Some(ForbiddenRule::Rule3));
    }

    Ok(None)
}

/// Create the ographic CRS of a body.
///
/// The authority code is `"IAU:<pub_year>:<gis_code>"` with `gis_code = naif_id * 100 + 1`.
///
/// # Errors
///
/// * [`IauWktError::OgraphicForbidden`] – one of the three suppression rules applies,
/// * [`IauWktError::UnrecognizedRotation`] – rotation is neither `Direct` nor `Retrograde`,
/// * [`IauWktError::DegenerateGeometry`] – semi-major axis is not strictly positive.
pub fn create(
    record: &PhysicalRecord,
    pub_year: u16,
    authority_group: &str,
) -> Result<CrsDescriptor, IauWktError> {
    if let Some(rule) = forbidden_rule(record)? {
        return Err(IauWktError::OgraphicForbidden {
            rule,
            body: record.body.clone(),
        });
    }

    // Rule1 guarantees a rotation here
    let longitude_direction =
        longitude_direction_from_rotation(record.rotation.as_deref().unwrap_or_default())?;

    let gis_code = body_gis_code(record) + OGRAPHIC_OFFSET;
    let names = CrsNames::for_body(
        record,
        pub_year,
        authority_group,
        "ographic",
        gis_code,
        format!("IAU:{pub_year}:{gis_code}"),
    );

    let crs = if is_triaxial(record.semi_major, record.semi_minor, record.axis_b) {
        CrsDescriptor::OgraphicTriaxial {
            names,
            triaxial: Triaxial {
                radius: TRIAXIAL_OGRAPHIC_NOMINAL_RADIUS,
                semi_major: record.semi_major,
                axis_b: record.axis_b,
                semi_minor: record.semi_minor,
            },
            longitude_direction,
        }
    } else {
        CrsDescriptor::Ographic {
            names,
            ellipsoid: Ellipsoid {
                radius: record.mean_radius,
                inverse_flattening: compute_inverse_flattening(
                    record.semi_major,
                    record.semi_minor,
                )?,
            },
            longitude_direction,
        }
    };

    debug!(
        body = %record.body,
        code = crs.authority_code(),
        longitude = %longitude_direction,
        "ographic CRS created"
    );
    Ok(crs)
}
