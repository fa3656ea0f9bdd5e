//! Planetocentric CRS builder.
//!
//! Every valid body gets exactly one ocentric CRS. Following the IAU definition its
//! longitudes are counted positively to the east whatever the rotation sense.
//! The figure is triaxial when [`is_triaxial`] says so, a rotational ellipsoid otherwise.

use tracing::debug;

use crate::{
    classification::{compute_inverse_flattening, is_triaxial},
    constants::OCENTRIC_OFFSET,
    iau_errors::IauWktError,
    record::PhysicalRecord,
};

use super::{body_gis_code, CrsDescriptor, CrsNames, Ellipsoid, Triaxial};

/// Create the ocentric CRS of a body.
///
/// The authority code is `"<pub_year>:<gis_code>"` with `gis_code = naif_id * 100`.
///
/// # Errors
///
/// [`IauWktError::DegenerateGeometry`] if the semi-major axis is not strictly positive,
/// which the catalogue validation already excludes.
pub fn create(
    record: &PhysicalRecord,
    pub_year: u16,
    authority_group: &str,
) -> Result<CrsDescriptor, IauWktError> {
    let gis_code = body_gis_code(record) + OCENTRIC_OFFSET;
    let names = CrsNames::for_body(
        record,
        pub_year,
        authority_group,
        "ocentric",
        gis_code,
        format!("{pub_year}:{gis_code}"),
    );

    let crs = if is_triaxial(record.semi_major, record.semi_minor, record.axis_b) {
        CrsDescriptor::OcentricTriaxial {
            names,
            triaxial: Triaxial {
                radius: record.mean_radius,
                semi_major: record.semi_major,
                axis_b: record.axis_b,
                semi_minor: record.semi_minor,
            },
        }
    } else {
        CrsDescriptor::Ocentric {
            names,
            ellipsoid: Ellipsoid {
                radius: record.mean_radius,
                inverse_flattening: compute_inverse_flattening(
                    record.semi_major,
                    record.semi_minor,
                )?,
            },
        }
    };

    debug!(
        body = %record.body,
        code = crs.authority_code(),
        triaxial = crs.is_triaxial(),
        "ocentric CRS created"
    );
    Ok(crs)
}
