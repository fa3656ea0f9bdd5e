//! Serialization of processed CRS entries.
//!
//! Two formats are available:
//!
//! * [`OutputFormat::Wkt`] – the publication citation, then one section per body with
//!   `"<authority code>,<wkt>"` lines,
//! * [`OutputFormat::Csv`] – one [`CrsRecord`] per entry, with a header row.

use std::{fmt, io::Write, str::FromStr};

use itertools::Itertools;

use crate::{
    catalog::{CrsEntry, Publication},
    crs::crs_record::CrsRecord,
    iau_errors::IauWktError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Wkt,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = IauWktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WKT" => Ok(OutputFormat::Wkt),
            "CSV" => Ok(OutputFormat::Csv),
            _ => Err(IauWktError::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Wkt => "WKT",
            OutputFormat::Csv => "CSV",
        };
        write!(f, "{s}")
    }
}

/// Write the entries as a WKT catalogue.
///
/// A section comment `#<authority> WKT Codes for <body>` opens each run of entries
/// sharing the same body. An empty entry list still produces the citation header.
pub fn save_as_wkt<W: Write>(
    entries: &[CrsEntry],
    publication: Publication,
    mut writer: W,
) -> Result<(), IauWktError> {
    writeln!(writer, "{}", publication.references())?;

    for (target, group) in &entries.iter().chunk_by(|entry| entry.target.clone()) {
        let mut group = group.peekable();
        if let Some(first) = group.peek() {
            write!(
                writer,
                "\n\n#{} WKT Codes for {target}\n",
                first.crs.authority_name()
            )?;
        }
        for entry in group {
            write!(
                writer,
                "{},{}\n\n",
                entry.crs.authority_code(),
                entry.crs.to_wkt()
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write the entries as a CSV table of [`CrsRecord`].
pub fn save_as_csv<W: Write>(entries: &[CrsEntry], writer: W) -> Result<(), IauWktError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(CrsRecord::from(&entry.crs))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_as<W: Write>(
    entries: &[CrsEntry],
    publication: Publication,
    format: OutputFormat,
    writer: W,
) -> Result<(), IauWktError> {
    match format {
        OutputFormat::Wkt => save_as_wkt(entries, publication, writer),
        OutputFormat::Csv => save_as_csv(entries, writer),
    }
}
