//! # Catalogue rows and physical records
//!
//! The IAU radii catalogue is a headerless-by-contract CSV file with nine columns:
//!
//! ```text
//! Naif_id,Body,Mean,Semimajor,Axisb,Semiminor,rotation,origin_long_name,origin_lon_pos
//! 499,Mars,3389500.00,3396190.00,3396190.00,3376200.00,Direct,Airy-0,0
//! ```
//!
//! Each line is first deserialized into a raw [`CatalogRow`] (all strings, missing
//! trailing columns default to empty), then validated into a typed [`PhysicalRecord`].
//! The empty string and the `-1` sentinel both mean *unknown*.
//!
//! A row is rejected with [`IauWktError::RowValidation`] when:
//! - the NAIF identifier is not a strictly positive integer, or is too large for the
//!   GIS codes derived from it,
//! - the mean radius, semi-major axis, axis b or semi-minor axis is unknown, not a number
//!   or not strictly positive.

use serde::Deserialize;

use crate::{
    classification::is_equal,
    constants::{Meter, NaifId, GIS_CODE_FACTOR, MAX_GIS_CODE_OFFSET, UNKNOWN_SENTINEL},
    iau_errors::IauWktError,
};

/// One raw line of the catalogue, column by column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogRow {
    pub naif_id: String,
    pub body: String,
    pub mean: String,
    pub semi_major: String,
    pub axis_b: String,
    pub semi_minor: String,
    pub rotation: String,
    pub origin_long_name: String,
    pub origin_long_pos: String,
}

/// Physical parameters of one body, validated and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalRecord {
    pub naif_id: NaifId,
    pub body: String,
    pub mean_radius: Meter,
    pub semi_major: Meter,
    pub axis_b: Meter,
    pub semi_minor: Meter,
    /// Raw rotation sense, `None` when the catalogue leaves it empty
    pub rotation: Option<String>,
    pub origin_longitude_name: Option<String>,
    pub origin_longitude_offset: Option<f64>,
}

/// Empty strings and the `-1` sentinel are unknown values.
fn normalize(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || value == "-1" {
        None
    } else {
        Some(value)
    }
}

fn parse_radius(raw: &str, column: &str, row: &CatalogRow) -> Result<Meter, IauWktError> {
    let value = normalize(raw)
        .ok_or_else(|| IauWktError::RowValidation(format!("no {column} for {row:?}")))?;

    let radius = value.parse::<f64>().map_err(|_| {
        IauWktError::RowValidation(format!("{column}={value} is not a number for {row:?}"))
    })?;

    if is_equal(radius, UNKNOWN_SENTINEL) {
        return Err(IauWktError::RowValidation(format!(
            "no {column} for {row:?}"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(IauWktError::RowValidation(format!(
            "{column}={value} must be > 0 for {row:?}"
        )));
    }
    Ok(radius)
}

impl TryFrom<&CatalogRow> for PhysicalRecord {
    type Error = IauWktError;

    fn try_from(row: &CatalogRow) -> Result<Self, Self::Error> {
        let naif_id = row
            .naif_id
            .trim()
            .parse::<NaifId>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                IauWktError::RowValidation(format!("no valid NAIF identifier for {row:?}"))
            })?;

        // every GIS code derived from the identifier must fit in a GisCode
        naif_id
            .checked_mul(GIS_CODE_FACTOR)
            .and_then(|code| code.checked_add(MAX_GIS_CODE_OFFSET))
            .ok_or_else(|| {
                IauWktError::RowValidation(format!(
                    "NAIF identifier {naif_id} is too large for {row:?}"
                ))
            })?;

        let origin_longitude_offset = normalize(&row.origin_long_pos)
            .map(|pos| {
                pos.parse::<f64>().map_err(|_| {
                    IauWktError::RowValidation(format!(
                        "origin longitude {pos} is not a number for {row:?}"
                    ))
                })
            })
            .transpose()?;

        Ok(PhysicalRecord {
            naif_id,
            body: row.body.trim().to_string(),
            mean_radius: parse_radius(&row.mean, "mean radius", row)?,
            semi_major: parse_radius(&row.semi_major, "semi-major radius", row)?,
            axis_b: parse_radius(&row.axis_b, "axis b", row)?,
            semi_minor: parse_radius(&row.semi_minor, "semi-minor radius", row)?,
            rotation: normalize(&row.rotation).map(str::to_string),
            origin_longitude_name: normalize(&row.origin_long_name).map(str::to_string),
            origin_longitude_offset,
        })
    }
}

impl TryFrom<CatalogRow> for PhysicalRecord {
    type Error = IauWktError;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        PhysicalRecord::try_from(&row)
    }
}

#[cfg(test)]
pub(crate) mod test_record {
    use super::*;

    pub(crate) fn row(fields: [&str; 9]) -> CatalogRow {
        CatalogRow {
            naif_id: fields[0].into(),
            body: fields[1].into(),
            mean: fields[2].into(),
            semi_major: fields[3].into(),
            axis_b: fields[4].into(),
            semi_minor: fields[5].into(),
            rotation: fields[6].into(),
            origin_long_name: fields[7].into(),
            origin_long_pos: fields[8].into(),
        }
    }

    pub(crate) fn mars() -> PhysicalRecord {
        PhysicalRecord::try_from(row([
            "499", "Mars", "3389500.00", "3396190.00", "3396190.00", "3376200.00", "Direct",
            "Airy-0", "0",
        ]))
        .unwrap()
    }

    #[test]
    fn test_valid_row() {
        let mars = mars();
        assert_eq!(mars.naif_id, 499);
        assert_eq!(mars.body, "Mars");
        assert_eq!(mars.mean_radius, 3389500.0);
        assert_eq!(mars.semi_major, 3396190.0);
        assert_eq!(mars.axis_b, 3396190.0);
        assert_eq!(mars.semi_minor, 3376200.0);
        assert_eq!(mars.rotation.as_deref(), Some("Direct"));
        assert_eq!(mars.origin_longitude_name.as_deref(), Some("Airy-0"));
        assert_eq!(mars.origin_longitude_offset, Some(0.0));
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let moon = PhysicalRecord::try_from(row([
            "301", "Moon", "1737400.00", "1737400.00", "1737400.00", "1737400.00", "", "", "",
        ]))
        .unwrap();
        assert_eq!(moon.rotation, None);
        assert_eq!(moon.origin_longitude_name, None);
        assert_eq!(moon.origin_longitude_offset, None);
    }

    #[test]
    fn test_rejected_rows() {
        // header line
        let header = row([
            "Naif_id", "Body", "Mean", "Semimajor", "Axisb", "Semiminor", "rotation",
            "origin_long_name", "origin_lon_pos",
        ]);
        assert!(matches!(
            PhysicalRecord::try_from(&header),
            Err(IauWktError::RowValidation(_))
        ));

        let no_semi_major = row([
            "1000012", "Halley", "5500.00", "-1", "-1", "-1", "", "", "",
        ]);
        assert!(PhysicalRecord::try_from(&no_semi_major).is_err());

        let sentinel_as_float = row([
            "1000012", "Halley", "-1.00", "8000.00", "8000.00", "4000.00", "", "", "",
        ]);
        assert!(PhysicalRecord::try_from(&sentinel_as_float).is_err());

        let negative_id = row([
            "-5", "Thing", "10.0", "10.0", "10.0", "10.0", "Direct", "", "",
        ]);
        assert!(PhysicalRecord::try_from(&negative_id).is_err());

        let zero_radius = row(["7", "Thing", "10.0", "0.0", "10.0", "10.0", "", "", ""]);
        assert!(PhysicalRecord::try_from(&zero_radius).is_err());
    }

    #[test]
    fn test_naif_id_bounds() {
        let too_large = row([
            "99999999999999999", "Big", "10.0", "10.0", "10.0", "10.0", "Direct", "", "",
        ]);
        assert!(matches!(
            PhysicalRecord::try_from(&too_large),
            Err(IauWktError::RowValidation(_))
        ));

        let limit = (i64::MAX - MAX_GIS_CODE_OFFSET) / GIS_CODE_FACTOR;
        let largest = row([
            &limit.to_string(), "Edge", "10.0", "10.0", "10.0", "10.0", "Direct", "", "",
        ]);
        assert_eq!(PhysicalRecord::try_from(&largest).map(|r| r.naif_id), Ok(limit));

        let above = row([
            &(limit + 1).to_string(), "Edge", "10.0", "10.0", "10.0", "10.0", "Direct", "",
            "",
        ]);
        assert!(PhysicalRecord::try_from(&above).is_err());
    }
}
