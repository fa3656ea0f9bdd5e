//! # Coordinate reference system descriptors
//!
//! A [`CrsDescriptor`] is the value object produced for every body of the catalogue.
//! It is a closed sum type over the five shapes a CRS can take:
//!
//! | Variant             | Figure                      | Longitude             |
//! |---------------------|-----------------------------|-----------------------|
//! | `Ocentric`          | [`Ellipsoid`]               | east                  |
//! | `OcentricTriaxial`  | [`Triaxial`]                | east                  |
//! | `Ographic`          | [`Ellipsoid`]               | from rotation sense   |
//! | `OgraphicTriaxial`  | [`Triaxial`]                | from rotation sense   |
//! | `Projected`         | inherited from its base     | inherited             |
//!
//! Builders live in the sub-modules:
//!
//! * [`ocentric::create`] – planetocentric CRS, never suppressed,
//! * [`ographic::create`] – planetographic CRS, suppressed by three rules,
//! * [`projected::create_all`] – one projected CRS per entry of [`projected::PROJECTIONS`].
//!
//! The textual form is produced by [`CrsDescriptor::to_wkt`] (see [`wkt`]) and the flat
//! tabular form by [`crs_record::CrsRecord`].
//!
//! ## Naming
//!
//! For a body `Mars`, the 2015 report and the `IAU` group:
//!
//! ```text
//! geographic name : "Mars 2015 ocentric"   / "Mars 2015 ographic"
//! datum name      : "D_Mars_2015"
//! ellipsoid name  : "Mars_2015_IAU"
//! authority code  : "2015:49900"           / "IAU:2015:49901"
//! ```
pub mod crs_record;
pub mod ocentric;
pub mod ographic;
pub mod projected;
pub mod wkt;

use std::fmt;

use crate::{
    classification::LongitudeDirection,
    constants::{GisCode, Meter, GIS_CODE_FACTOR},
    record::PhysicalRecord,
};

use projected::Projection;

/// High level category of a CRS, used to tag the catalogue output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrsKind {
    Ocentric,
    Ographic,
    ProjectedOcentric,
    ProjectedOgraphic,
}

impl fmt::Display for CrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrsKind::Ocentric => "Ocentric",
            CrsKind::Ographic => "Ographic",
            CrsKind::ProjectedOcentric => "Projected ocentric",
            CrsKind::ProjectedOgraphic => "Projected ographic",
        };
        write!(f, "{s}")
    }
}

/// Names and authority shared by every geographic CRS.
#[derive(Debug, Clone, PartialEq)]
pub struct CrsNames {
    pub geographic_name: String,
    pub datum_name: String,
    pub ellipsoid_name: String,
    pub authority_name: String,
    pub authority_code: String,
    pub gis_code: GisCode,
}

impl CrsNames {
    /// Apply the naming convention of the IAU catalogue.
    ///
    /// `flavour` is `"ocentric"` or `"ographic"`; `authority_code` is supplied by the
    /// caller since its format depends on the flavour.
    pub(crate) fn for_body(
        record: &PhysicalRecord,
        pub_year: u16,
        authority_group: &str,
        flavour: &str,
        gis_code: GisCode,
        authority_code: String,
    ) -> Self {
        let body = &record.body;
        CrsNames {
            geographic_name: format!("{body} {pub_year} {flavour}"),
            datum_name: format!("D_{body}_{pub_year}"),
            ellipsoid_name: format!("{body}_{pub_year}_{authority_group}"),
            authority_name: authority_group.to_string(),
            authority_code,
            gis_code,
        }
    }
}

/// Rotational ellipsoid (or sphere when `inverse_flattening == 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub radius: Meter,
    pub inverse_flattening: f64,
}

/// Figure with three semi-axes.
///
/// `radius` is a nominal value only: the mean radius for an ocentric CRS,
/// `1.0` for an ographic one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triaxial {
    pub radius: Meter,
    pub semi_major: Meter,
    pub axis_b: Meter,
    pub semi_minor: Meter,
}

/// A projected CRS built on top of an ocentric or ographic CRS.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCrs {
    pub base: Box<CrsDescriptor>,
    pub projection: &'static Projection,
    pub projection_name: String,
    pub authority_name: String,
    pub authority_code: String,
    pub gis_code: GisCode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CrsDescriptor {
    Ocentric {
        names: CrsNames,
        ellipsoid: Ellipsoid,
    },
    OcentricTriaxial {
        names: CrsNames,
        triaxial: Triaxial,
    },
    Ographic {
        names: CrsNames,
        ellipsoid: Ellipsoid,
        longitude_direction: LongitudeDirection,
    },
    OgraphicTriaxial {
        names: CrsNames,
        triaxial: Triaxial,
        longitude_direction: LongitudeDirection,
    },
    Projected(ProjectedCrs),
}

impl CrsDescriptor {
    /// The geographic CRS this descriptor is built on (itself unless projected).
    pub fn geographic_base(&self) -> &CrsDescriptor {
        match self {
            CrsDescriptor::Projected(projected) => projected.base.geographic_base(),
            _ => self,
        }
    }

    /// Names of the underlying geographic CRS.
    pub fn names(&self) -> &CrsNames {
        match self {
            CrsDescriptor::Ocentric { names, .. }
            | CrsDescriptor::OcentricTriaxial { names, .. }
            | CrsDescriptor::Ographic { names, .. }
            | CrsDescriptor::OgraphicTriaxial { names, .. } => names,
            CrsDescriptor::Projected(projected) => projected.base.names(),
        }
    }

    pub fn kind(&self) -> CrsKind {
        match self {
            CrsDescriptor::Ocentric { .. } | CrsDescriptor::OcentricTriaxial { .. } => {
                CrsKind::Ocentric
            }
            CrsDescriptor::Ographic { .. } | CrsDescriptor::OgraphicTriaxial { .. } => {
                CrsKind::Ographic
            }
            CrsDescriptor::Projected(projected) => match projected.base.kind() {
                CrsKind::Ographic | CrsKind::ProjectedOgraphic => CrsKind::ProjectedOgraphic,
                CrsKind::Ocentric | CrsKind::ProjectedOcentric => CrsKind::ProjectedOcentric,
            },
        }
    }

    pub fn is_triaxial(&self) -> bool {
        match self {
            CrsDescriptor::OcentricTriaxial { .. } | CrsDescriptor::OgraphicTriaxial { .. } => {
                true
            }
            CrsDescriptor::Ocentric { .. } | CrsDescriptor::Ographic { .. } => false,
            CrsDescriptor::Projected(projected) => projected.base.is_triaxial(),
        }
    }

    pub fn geographic_name(&self) -> &str {
        &self.names().geographic_name
    }

    pub fn datum_name(&self) -> &str {
        &self.names().datum_name
    }

    pub fn ellipsoid_name(&self) -> &str {
        &self.names().ellipsoid_name
    }

    /// Authority of this descriptor (the projection authority for a projected CRS).
    pub fn authority_name(&self) -> &str {
        match self {
            CrsDescriptor::Projected(projected) => &projected.authority_name,
            _ => &self.names().authority_name,
        }
    }

    /// Authority code of this descriptor (the projection code for a projected CRS).
    pub fn authority_code(&self) -> &str {
        match self {
            CrsDescriptor::Projected(projected) => &projected.authority_code,
            _ => &self.names().authority_code,
        }
    }

    pub fn gis_code(&self) -> GisCode {
        match self {
            CrsDescriptor::Projected(projected) => projected.gis_code,
            _ => self.names().gis_code,
        }
    }

    /// Radius of the figure, nominal for a triaxial body.
    pub fn radius(&self) -> Meter {
        match self {
            CrsDescriptor::Ocentric { ellipsoid, .. }
            | CrsDescriptor::Ographic { ellipsoid, .. } => ellipsoid.radius,
            CrsDescriptor::OcentricTriaxial { triaxial, .. }
            | CrsDescriptor::OgraphicTriaxial { triaxial, .. } => triaxial.radius,
            CrsDescriptor::Projected(projected) => projected.base.radius(),
        }
    }

    /// Inverse flattening, `0.0` for a sphere and for every triaxial figure.
    pub fn inverse_flattening(&self) -> f64 {
        match self {
            CrsDescriptor::Ocentric { ellipsoid, .. }
            | CrsDescriptor::Ographic { ellipsoid, .. } => ellipsoid.inverse_flattening,
            CrsDescriptor::OcentricTriaxial { .. } | CrsDescriptor::OgraphicTriaxial { .. } => 0.0,
            CrsDescriptor::Projected(projected) => projected.base.inverse_flattening(),
        }
    }

    /// Triaxial figure when there is one.
    pub fn triaxial(&self) -> Option<&Triaxial> {
        match self {
            CrsDescriptor::OcentricTriaxial { triaxial, .. }
            | CrsDescriptor::OgraphicTriaxial { triaxial, .. } => Some(triaxial),
            CrsDescriptor::Ocentric { .. } | CrsDescriptor::Ographic { .. } => None,
            CrsDescriptor::Projected(projected) => projected.base.triaxial(),
        }
    }

    /// Positive direction of longitudes; always east for an ocentric CRS.
    pub fn longitude_direction(&self) -> LongitudeDirection {
        match self {
            CrsDescriptor::Ocentric { .. } | CrsDescriptor::OcentricTriaxial { .. } => {
                LongitudeDirection::East
            }
            CrsDescriptor::Ographic {
                longitude_direction,
                ..
            }
            | CrsDescriptor::OgraphicTriaxial {
                longitude_direction,
                ..
            } => *longitude_direction,
            CrsDescriptor::Projected(projected) => projected.base.longitude_direction(),
        }
    }
}

/// Base GIS code of a body, shared by its ocentric CRS.
pub fn body_gis_code(record: &PhysicalRecord) -> GisCode {
    record.naif_id * GIS_CODE_FACTOR
}
