//! Flat, tabular view of a [`CrsDescriptor`].
//!
//! Used by the CSV output format: one [`CrsRecord`] per descriptor, serialized with
//! `serde` so that column names and order are fixed by the struct.

use serde::Serialize;

use crate::constants::Meter;

use super::CrsDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsRecord {
    #[serde(rename = "type")]
    pub crs_type: String,
    pub geogcs_name: String,
    pub datum_name: String,
    pub ellipsoid_name: String,
    pub radius: Meter,
    pub inverse_flattening: f64,
    pub semi_major: Option<Meter>,
    pub axis_b: Option<Meter>,
    pub semi_minor: Option<Meter>,
    pub longitude_order: Option<&'static str>,
    pub authority_name: String,
    pub authority_code: String,
    pub projection_name: Option<String>,
    pub projection_enum: Option<String>,
}

fn type_label(crs: &CrsDescriptor) -> String {
    match crs {
        CrsDescriptor::Ocentric { .. } => "OCENTRIC".to_string(),
        CrsDescriptor::OcentricTriaxial { .. } => "TRIAXIAL_OCENTRIC".to_string(),
        CrsDescriptor::Ographic { .. } => "OGRAPHIC".to_string(),
        CrsDescriptor::OgraphicTriaxial { .. } => "TRIAXIAL_OGRAPHIC".to_string(),
        CrsDescriptor::Projected(projected) => format!("{}_PROJECTED", type_label(&projected.base)),
    }
}

impl From<&CrsDescriptor> for CrsRecord {
    fn from(crs: &CrsDescriptor) -> Self {
        let base = crs.geographic_base();
        let triaxial = crs.triaxial();
        let longitude_order = match base {
            CrsDescriptor::Ographic {
                longitude_direction,
                ..
            }
            | CrsDescriptor::OgraphicTriaxial {
                longitude_direction,
                ..
            } => Some(longitude_direction.as_str()),
            _ => None,
        };
        let (projection_name, projection_enum) = match crs {
            CrsDescriptor::Projected(projected) => (
                Some(projected.projection_name.clone()),
                Some(projected.projection.kind.to_string()),
            ),
            _ => (None, None),
        };

        CrsRecord {
            crs_type: type_label(crs),
            geogcs_name: crs.geographic_name().to_string(),
            datum_name: crs.datum_name().to_string(),
            ellipsoid_name: crs.ellipsoid_name().to_string(),
            radius: crs.radius(),
            inverse_flattening: crs.inverse_flattening(),
            semi_major: triaxial.map(|t| t.semi_major),
            axis_b: triaxial.map(|t| t.axis_b),
            semi_minor: triaxial.map(|t| t.semi_minor),
            longitude_order,
            authority_name: crs.authority_name().to_string(),
            authority_code: crs.authority_code().to_string(),
            projection_name,
            projection_enum,
        }
    }
}
