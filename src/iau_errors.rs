use std::fmt;

use thiserror::Error;

/// The suppression rule that prevented the creation of an ographic CRS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenRule {
    /// No rotation sense in the catalogue, the longitude direction is unknown
    Rule1,
    /// Sun and Moon use an east-positive longitude by usage
    Rule2,
    /// Spherical body with a retrograde rotation, identical to its ocentric CRS
    Rule3,
}

impl fmt::Display for ForbiddenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForbiddenRule::Rule1 => "RULE1",
            ForbiddenRule::Rule2 => "RULE2",
            ForbiddenRule::Rule3 => "RULE3",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub enum IauWktError {
    #[error("Can't parse the year from filename: {0}")]
    MalformedYear(String),

    #[error("No reference for this year: {0}")]
    UnknownPublicationYear(u16),

    #[error("Row is ignored: {0}")]
    RowValidation(String),

    #[error("{body} - {rule} : Forbidden to create ographic CRS for {body}")]
    OgraphicForbidden { rule: ForbiddenRule, body: String },

    #[error("Unexpected value for rotation : {0}")]
    UnrecognizedRotation(String),

    #[error("Degenerate geometry: semi-major axis must be > 0, got {0}")]
    DegenerateGeometry(f64),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the csv processing: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for IauWktError {
    fn eq(&self, other: &Self) -> bool {
        use IauWktError::*;
        match (self, other) {
            (MalformedYear(a), MalformedYear(b)) => a == b,
            (UnknownPublicationYear(a), UnknownPublicationYear(b)) => a == b,
            (RowValidation(a), RowValidation(b)) => a == b,
            (
                OgraphicForbidden { rule: ra, body: ba },
                OgraphicForbidden { rule: rb, body: bb },
            ) => ra == rb && ba == bb,
            (UnrecognizedRotation(a), UnrecognizedRotation(b)) => a == b,
            (DegenerateGeometry(a), DegenerateGeometry(b)) => a == b,
            (UnknownOutputFormat(a), UnknownOutputFormat(b)) => a == b,

            // not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
