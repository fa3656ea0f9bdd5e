//! # Projected CRS
//!
//! The catalogue of supported map projections and the builder that wraps a geographic
//! CRS into a projected one.
//!
//! [`PROJECTIONS`] is closed: each entry fixes an offset code, the projection name used
//! in the WKT, an ordered list of parameters with their literal values and whether it
//! is a polar projection. Two families exist:
//!
//! - the classical projections (offsets 10–28) with fixed centres,
//! - the *auto* projections (offsets 60–82) whose parameters are meant to be overridden
//!   by the client (WMS `AUTO` requests).
//!
//! GIS codes of projected CRS:
//!
//! ```text
//! projected ocentric : naif_id * 100 + offset
//! projected ographic : naif_id * 100 + offset + 1
//! ```

use std::fmt;

use crate::{constants::OGRAPHIC_OFFSET, record::PhysicalRecord};

use super::{body_gis_code, CrsDescriptor, CrsKind, ProjectedCrs};

/// Literal value of a projection parameter.
///
/// Integer and float literals are kept apart so that `0` and `0.0` are written back
/// exactly as declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(i32),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    Equirectangular0,
    Equirectangular180,
    Sinusoidal0,
    Sinusoidal180,
    StereographicNorth,
    StereographicSouth,
    Mollweide0,
    Mollweide180,
    Robinson0,
    Robinson180,
    AutoSinusoidal,
    AutoStereographic,
    AutoTransverseMercator,
    AutoOrthographic,
    AutoEquirectangular,
    AutoLambertConformalConic,
    AutoLambertAzimuthalEqual,
    AutoMercator,
    AutoAlbers,
    AutoMollweide,
    AutoRobinson,
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectionKind::Equirectangular0 => "EQUIRECTANGULAR_0",
            ProjectionKind::Equirectangular180 => "EQUIRECTANGULAR_180",
            ProjectionKind::Sinusoidal0 => "SINUSOIDAL_0",
            ProjectionKind::Sinusoidal180 => "SINUSOIDAL_180",
            ProjectionKind::StereographicNorth => "STEREOGRAPHIC_NORTH",
            ProjectionKind::StereographicSouth => "STEREOGRAPHIC_SOUTH",
            ProjectionKind::Mollweide0 => "MOLLWEIDE_0",
            ProjectionKind::Mollweide180 => "MOLLWEIDE_180",
            ProjectionKind::Robinson0 => "ROBINSON_0",
            ProjectionKind::Robinson180 => "ROBINSON_180",
            ProjectionKind::AutoSinusoidal => "AUTO_SINUSOIDAL",
            ProjectionKind::AutoStereographic => "AUTO_STEREOGRAPHIC",
            ProjectionKind::AutoTransverseMercator => "AUTO_TRANSVERSE_MERCATOR",
            ProjectionKind::AutoOrthographic => "AUTO_ORTHOGRAPHIC",
            ProjectionKind::AutoEquirectangular => "AUTO_EQUIRECTANGULAR",
            ProjectionKind::AutoLambertConformalConic => "AUTO_LAMBERT_CONFORMAL_CONIC",
            ProjectionKind::AutoLambertAzimuthalEqual => "AUTO_LAMBERT_AZIMUTHAL_EQUAL",
            ProjectionKind::AutoMercator => "AUTO_MERCATOR",
            ProjectionKind::AutoAlbers => "AUTO_ALBERS",
            ProjectionKind::AutoMollweide => "AUTO_MOLLWEIDE",
            ProjectionKind::AutoRobinson => "AUTO_ROBINSON",
        };
        write!(f, "{s}")
    }
}

/// One entry of the projection catalogue.
#[derive(Debug, PartialEq)]
pub struct Projection {
    pub kind: ProjectionKind,
    /// Offset added to the body GIS code
    pub code: i64,
    pub url: &'static str,
    /// Name written in `PROJECTION["..."]`
    pub name: &'static str,
    /// Parameters in WKT order
    pub parameters: &'static [(&'static str, ParamValue)],
    pub is_polar: bool,
}

use ParamValue::{Float, Int};

const EQC_URL: &str = "https://proj4.org/operations/projections/eqc.html";
const SINU_URL: &str = "https://proj4.org/operations/projections/sinu.html";
const STERE_URL: &str = "https://proj4.org/operations/projections/stere.html";
const MOLL_URL: &str = "https://proj4.org/operations/projections/moll.html";
const ROBIN_URL: &str = "https://proj4.org/operations/projections/robin.html";

pub static PROJECTIONS: [Projection; 21] = [
    Projection {
        kind: ProjectionKind::Equirectangular0,
        code: 10,
        url: EQC_URL,
        name: "Equirectangular",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Equirectangular180,
        code: 12,
        url: EQC_URL,
        name: "Equirectangular",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(180)),
            ("Latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Sinusoidal0,
        code: 14,
        url: SINU_URL,
        name: "Sinusoidal",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Sinusoidal180,
        code: 16,
        url: SINU_URL,
        name: "Sinusoidal",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(180)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::StereographicNorth,
        code: 18,
        url: STERE_URL,
        name: "Stereographic",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Scale_Factor", Int(1)),
            ("Latitude_Of_Origin", Int(90)),
        ],
        is_polar: true,
    },
    Projection {
        kind: ProjectionKind::StereographicSouth,
        code: 20,
        url: STERE_URL,
        name: "Stereographic",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Scale_Factor", Int(1)),
            ("Latitude_Of_Origin", Int(-90)),
        ],
        is_polar: true,
    },
    Projection {
        kind: ProjectionKind::Mollweide0,
        code: 22,
        url: MOLL_URL,
        name: "Mollweide",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Mollweide180,
        code: 24,
        url: MOLL_URL,
        name: "Mollweide",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(180)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Robinson0,
        code: 26,
        url: ROBIN_URL,
        name: "Robinson",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::Robinson180,
        code: 28,
        url: ROBIN_URL,
        name: "Robinson",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(180)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoSinusoidal,
        code: 60,
        url: SINU_URL,
        name: "Sinusoidal",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoStereographic,
        code: 62,
        url: STERE_URL,
        name: "Stereographic",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Scale_Factor", Int(1)),
            ("Latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoTransverseMercator,
        code: 64,
        url: "https://proj4.org/operations/projections/tmerc.html",
        name: "Transverse_Mercator",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Scale_Factor", Float(0.9996)),
            ("Latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoOrthographic,
        code: 66,
        url: "https://proj4.org/operations/projections/ortho.html",
        name: "Orthographic",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Latitude_Of_Origin", Int(90)),
        ],
        is_polar: true,
    },
    Projection {
        kind: ProjectionKind::AutoEquirectangular,
        code: 68,
        url: EQC_URL,
        name: "Equirectangular",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(180)),
            ("Latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoLambertConformalConic,
        code: 70,
        url: "https://proj4.org/operations/projections/lcc.html",
        name: "Lambert_Conformal_Conic_2SP",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Standard_Parallel_1", Int(-20)),
            ("Standard_Parallel_2", Int(20)),
            ("Latitude_Of_Origin", Int(0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoLambertAzimuthalEqual,
        code: 72,
        url: "https://proj4.org/operations/projections/laea.html",
        name: "Lambert_Azimuthal_Equal_Area",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Int(0)),
            ("Latitude_Of_Center", Int(90)),
        ],
        is_polar: true,
    },
    Projection {
        kind: ProjectionKind::AutoMercator,
        code: 74,
        url: "https://proj4.org/operations/projections/merc.html",
        name: "Mercator_1SP",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Int(0)),
            ("Scale_Factor", Int(1)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoAlbers,
        code: 76,
        url: "https://proj4.org/operations/projections/aea.html",
        name: "Albers_Conic_Equal_Area",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_Of_Center", Float(0.0)),
            ("Standard_Parallel_1", Float(60.0)),
            ("Standard_Parallel_2", Float(20.0)),
            ("Latitude_Of_Center", Float(40.0)),
        ],
        is_polar: false,
    },
    // Oblique_Cylindrical_Equal_Area (offset 78) is left out until GDAL handles its parameters
    Projection {
        kind: ProjectionKind::AutoMollweide,
        code: 80,
        url: MOLL_URL,
        name: "Mollweide",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Central_Meridian", Float(0.0)),
        ],
        is_polar: false,
    },
    Projection {
        kind: ProjectionKind::AutoRobinson,
        code: 82,
        url: ROBIN_URL,
        name: "Robinson",
        parameters: &[
            ("False_Easting", Int(0)),
            ("False_Northing", Int(0)),
            ("Longitude_of_center", Float(0.0)),
        ],
        is_polar: false,
    },
];

impl ProjectionKind {
    /// Position of the kind in [`PROJECTIONS`].
    const fn index(self) -> usize {
        match self {
            ProjectionKind::Equirectangular0 => 0,
            ProjectionKind::Equirectangular180 => 1,
            ProjectionKind::Sinusoidal0 => 2,
            ProjectionKind::Sinusoidal180 => 3,
            ProjectionKind::StereographicNorth => 4,
            ProjectionKind::StereographicSouth => 5,
            ProjectionKind::Mollweide0 => 6,
            ProjectionKind::Mollweide180 => 7,
            ProjectionKind::Robinson0 => 8,
            ProjectionKind::Robinson180 => 9,
            ProjectionKind::AutoSinusoidal => 10,
            ProjectionKind::AutoStereographic => 11,
            ProjectionKind::AutoTransverseMercator => 12,
            ProjectionKind::AutoOrthographic => 13,
            ProjectionKind::AutoEquirectangular => 14,
            ProjectionKind::AutoLambertConformalConic => 15,
            ProjectionKind::AutoLambertAzimuthalEqual => 16,
            ProjectionKind::AutoMercator => 17,
            ProjectionKind::AutoAlbers => 18,
            ProjectionKind::AutoMollweide => 19,
            ProjectionKind::AutoRobinson => 20,
        }
    }
}

impl Projection {
    /// Catalogue entry of a projection kind.
    pub fn get(kind: ProjectionKind) -> &'static Projection {
        &PROJECTIONS[kind.index()]
    }
}

/// Wrap `base` into the projection `projection`.
///
/// `base` is reduced to its geographic CRS first, so a projected descriptor never nests
/// another projected one. The ographic variant gets the GIS code of its ocentric sibling
/// plus one.
pub fn create(
    record: &PhysicalRecord,
    base: &CrsDescriptor,
    projection: &'static Projection,
    pub_year: u16,
    authority_group: &str,
) -> CrsDescriptor {
    let base = base.geographic_base();
    let mut gis_code = body_gis_code(record) + projection.code;
    if base.kind() == CrsKind::Ographic {
        gis_code += OGRAPHIC_OFFSET;
    }

    CrsDescriptor::Projected(ProjectedCrs {
        base: Box::new(base.clone()),
        projection,
        projection_name: format!("{}_{}", record.body, projection.name),
        authority_name: authority_group.to_string(),
        authority_code: format!("{pub_year}:{gis_code}"),
        gis_code,
    })
}

/// Project `base` with every entry of [`PROJECTIONS`], in catalogue order.
pub fn create_all(
    record: &PhysicalRecord,
    base: &CrsDescriptor,
    pub_year: u16,
    authority_group: &str,
) -> Vec<CrsDescriptor> {
    PROJECTIONS
        .iter()
        .map(|projection| create(record, base, projection, pub_year, authority_group))
        .collect()
}
