//! WKT (version 2 flavoured) rendering of [`CrsDescriptor`].
//!
//! The layout of each template is reproduced byte for byte from the files already
//! published for the IAU catalogue, spacing included, so that regenerating a catalogue
//! gives an identical file. Floats are written in their shortest round-trip form with
//! a mandatory fractional part (`3396190.0`).

use std::fmt::{self, Write};

use crate::constants::{IAU_REPORT_REMARK, PRIME_MERIDIAN_NAME};

use super::{CrsDescriptor, CrsNames, Ellipsoid, ProjectedCrs, Triaxial};

const LENGTH_UNIT_METRE: &str = r#"LENGTHUNIT["metre", 1.0, ID["EPSG", 9001]]"#;

/// Shortest round-trip representation, always with a fractional part.
pub(crate) fn fmt_float(value: f64) -> String {
    format!("{value:?}")
}

fn write_ellipsoid_datum(
    out: &mut String,
    names: &CrsNames,
    ellipsoid: &Ellipsoid,
    separator: &str,
) -> fmt::Result {
    write!(
        out,
        r#"DATUM["{}",ELLIPSOID["{}",{sep}{},{sep}{}, {LENGTH_UNIT_METRE}],],"#,
        names.datum_name,
        names.ellipsoid_name,
        fmt_float(ellipsoid.radius),
        fmt_float(ellipsoid.inverse_flattening),
        sep = separator,
    )
}

fn write_triaxial_datum(out: &mut String, names: &CrsNames, triaxial: &Triaxial) -> fmt::Result {
    write!(
        out,
        r#"DATUM["{}",TRIAXIAL["{}", {}, {}, {}, {LENGTH_UNIT_METRE}],],"#,
        names.datum_name,
        names.ellipsoid_name,
        fmt_float(triaxial.semi_major),
        fmt_float(triaxial.axis_b),
        fmt_float(triaxial.semi_minor),
    )
}

fn write_authority_and_remark(out: &mut String, names: &CrsNames) -> fmt::Result {
    write!(
        out,
        r#"AUTHORITY["{}","{}"],REMARK["{IAU_REPORT_REMARK}"]]"#,
        names.authority_name, names.authority_code
    )
}

fn write_wkt(crs: &CrsDescriptor, out: &mut String) -> fmt::Result {
    match crs {
        CrsDescriptor::Ocentric { names, ellipsoid } => {
            write!(out, r#"GEODCRS["{}","#, names.geographic_name)?;
            write_ellipsoid_datum(out, names, ellipsoid, "")?;
            write!(
                out,
                r#"PRIMEM["{PRIME_MERIDIAN_NAME}", 0.0],CS[spherical,3],AXIS["lat", north, ORDER[1]],AXIS["long", east, ORDER[2]],AXIS["distance (r)",{} , ORDER[3], LENGTHUNIT["meter", 1]],ANGLEUNIT["Degree", 0.0174532925199433, AUTHORITY["EPSG","9122"]],"#,
                fmt_float(ellipsoid.radius)
            )?;
            write_authority_and_remark(out, names)
        }
        CrsDescriptor::OcentricTriaxial { names, triaxial } => {
            write!(out, r#"GEODCRS["{}","#, names.geographic_name)?;
            write_triaxial_datum(out, names, triaxial)?;
            write!(
                out,
                r#"PRIMEM["{PRIME_MERIDIAN_NAME}", 0.0],CS[spherical,3],AXIS["lat", north, ORDER[1]],AXIS["long", east, ORDER[2]],AXIS["distance (r)", {}, ORDER[3],LENGTHUNIT["meter",1000]],ANGLEUNIT["Degree", 0.0174532925199433, AUTHORITY["EPSG","9122"]],"#,
                fmt_float(triaxial.radius)
            )?;
            write_authority_and_remark(out, names)
        }
        CrsDescriptor::Ographic {
            names,
            ellipsoid,
            longitude_direction,
        } => {
            write!(out, r#"GEOGCRS["{}","#, names.geographic_name)?;
            write_ellipsoid_datum(out, names, ellipsoid, " ")?;
            write!(
                out,
                r#"PRIMEM["{PRIME_MERIDIAN_NAME}", 0.0],CS[ellipsoidal,2],AXIS["lat", north, ORDER[1]],AXIS["long", {longitude_direction}, ORDER[2]],ANGLEUNIT["Degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],"#
            )?;
            write_authority_and_remark(out, names)
        }
        CrsDescriptor::OgraphicTriaxial {
            names,
            triaxial,
            longitude_direction,
        } => {
            write!(out, r#"GEOGCRS["{}","#, names.geographic_name)?;
            write_triaxial_datum(out, names, triaxial)?;
            // the direction is quoted in the triaxial template
            write!(
                out,
                r#"PRIMEM["{PRIME_MERIDIAN_NAME}", 0.0],CS[ellipsoidal,2],AXIS["lat", north, ORDER[1]],AXIS["long", "{longitude_direction}", ORDER[2]],ANGLEUNIT["Degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],"#
            )?;
            write_authority_and_remark(out, names)
        }
        CrsDescriptor::Projected(projected) => write_projected(projected, out),
    }
}

fn write_projected(projected: &ProjectedCrs, out: &mut String) -> fmt::Result {
    write!(out, r#"PROJCS["{}","#, projected.projection_name)?;
    write_wkt(&projected.base, out)?;
    write!(out, r#",PROJECTION["{}"]"#, projected.projection.name)?;
    for (name, value) in projected.projection.parameters {
        write!(out, r#",PARAMETER["{name}",{value}]"#)?;
    }
    write!(
        out,
        r#",UNIT["Meter",1, AUTHORITY["EPSG","9001"]],AUTHORITY["{}","{}"]]"#,
        projected.authority_name, projected.authority_code
    )
}

impl CrsDescriptor {
    /// Render this descriptor as a single-line WKT string.
    pub fn to_wkt(&self) -> String {
        let mut out = String::with_capacity(640);
        // writing into a String cannot fail
        let _ = write_wkt(self, &mut out);
        out
    }
}

impl fmt::Display for CrsDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
