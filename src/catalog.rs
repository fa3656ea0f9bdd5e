//! # IAU catalogue processing
//!
//! [`IauCatalog`] turns the IAU radii catalogue (CSV) into the ordered list of CRS
//! published for every body.
//!
//! ## Publication
//!
//! The publication year is read from the catalogue file name
//! (`naifcodes_radii_m_wAsteroids_IAU2015.csv` → 2015) and selects a [`Publication`],
//! which fixes the authority group and the citation written at the top of the output.
//! Before 2015 longitudes were not counted following the IAU definition, so older
//! catalogues are refused.
//!
//! ## Row processing
//!
//! Each row goes through the same steps:
//!
//! ```text
//! read -> validated -> ocentric built -> ographic built | ographic skipped
//!      -> projected expansion -> emitted
//! ```
//!
//! Failures are isolated per row: an invalid row is logged and skipped, a forbidden
//! or unrecognized ographic CRS only removes the ographic branch of that row.
//! Only catalogue-level failures (unreadable file, unknown year) abort the run.
//!
//! ## Logging
//!
//! The catalogue owns its [`tracing::Dispatch`]. It is silent by default
//! ([`Dispatch::none`]) and can be given any subscriber with [`IauCatalog::with_dispatch`].
//!
//! ## Example
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use iau_wkt::catalog::IauCatalog;
//!
//! let catalog = IauCatalog::new(Utf8Path::new("naifcodes_radii_m_wAsteroids_IAU2015.csv")).unwrap();
//! let entries = catalog.process_file().unwrap();
//! println!("{} CRS", entries.len());
//! ```

use std::{fs::File, io::Read, sync::LazyLock};

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;
use regex::Regex;
use tracing::{debug, dispatcher, error, info_span, warn, Dispatch};

use crate::{
    constants::FIRST_SUPPORTED_YEAR,
    crs::{ocentric, ographic, projected, CrsDescriptor, CrsKind},
    iau_errors::IauWktError,
    record::{CatalogRow, PhysicalRecord},
};

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"IAU(\d{4})\.").expect("valid year pattern"));

const IAU2000_REFERENCES: &str = r#"#IAU2000 WKT Codes
# This file derived from the naif ID Codes.txt file distributed by
# USGS for NASA/IAU/NAIF (http://naif.jpl.nasa.gov/)
#
#
#     The sources for the constants listed in this file are:
#
#        [1]  Seidelmann, P.K., Abalakin, V.K., Bursa, M., Davies, M.E.,
#              Bergh, C. de, Lieske, J.H., Oberst, J., Simon, J.L.,
#              Standish, E.M., Stooke, P., and Thomas, P.C. (2002).
#              "Report of the IAU/IAG Working Group on Cartographic
#              Coordinates and Rotational Elements of the Planets and
#              Satellites: 2000," Celestial Mechanics and Dynamical
#              Astronomy, v.82, Issue 1, pp. 83-111.
#
"#;

const IAU2009_REFERENCES: &str = r#"#IAU2009 WKT Codes
# This file derived from the naif ID Codes.txt file distributed by
# USGS for NASA/IAU/NAIF (http://naif.jpl.nasa.gov/)
#
#
#     The sources for the constants listed in this file are:
#
#        [2]  Archinal, B. A., M. F. A'Hearn, E. Bowell, A. Conrad,
#              G. J. Consolmagno, R. Courtin, T. Fukushima, D. Hestroffer,
#              J. L. Hilton, G. A. Krasinsky, G. Neumann, J. Oberst,
#              P. K. Seidelmann, P. Stooke, D. J. Tholen, P. C. Thomas,
#              I. P. Williams (2011), "Report of the IAU Working Group
#              on Cartographic Coordinates and Rotational Elements of the
#              Planets and Satellites: 2011," Celestial Mechanics and Dynamical
#              Astronomy, v.109, Issue 2, pp. 101-135.
#
"#;

const IAU2015_REFERENCES: &str = r#"#IAU2015 WKT Codes
# This file derived from the naif ID Codes.txt file distributed by
# USGS for NASA/IAU/NAIF (http://naif.jpl.nasa.gov/)
#
#
#     The sources for the constants listed in this file are:
#
#        [3] Archinal, B. A., C. H. Acton, M. F. A'Hearn, A. Conrad,
#             G. J. Consolmagno, T. Duxbury, D. Hestroffer, J. L. Hilton,
#             R. L. Kirk, S. A. Klioner, D. McCarthy, J. Oberst, J. Ping,
#             P. K. Seidelmann, D. J. Tholen, P. C. Thomas,
#             I. P. Williams (2018), "Report of the IAU Working Group
#             on Cartographic Coordinates and Rotational Elements of the
#             Planets and Satellites: 2015," Celestial Mechanics and Dynamical
#             Astronomy, 130: 22. https://doi.org/10.1007/s10569-017-9805-5.
#
"#;

/// IAU working group reports a catalogue can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    Iau2000,
    Iau2009,
    Iau2015,
}

impl Publication {
    pub fn year(&self) -> u16 {
        match self {
            Publication::Iau2000 => 2000,
            Publication::Iau2009 => 2009,
            Publication::Iau2015 => 2015,
        }
    }

    /// Authority group used in every name and authority of the publication.
    pub fn authority_group(&self) -> &'static str {
        match self {
            Publication::Iau2000 => "IAU_IAG",
            Publication::Iau2009 | Publication::Iau2015 => "IAU",
        }
    }

    /// Citation block written at the top of a WKT file.
    pub fn references(&self) -> &'static str {
        match self {
            Publication::Iau2000 => IAU2000_REFERENCES,
            Publication::Iau2009 => IAU2009_REFERENCES,
            Publication::Iau2015 => IAU2015_REFERENCES,
        }
    }
}

impl TryFrom<u16> for Publication {
    type Error = IauWktError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        match year {
            2000 => Ok(Publication::Iau2000),
            2009 => Ok(Publication::Iau2009),
            2015 => Ok(Publication::Iau2015),
            _ => Err(IauWktError::UnknownPublicationYear(year)),
        }
    }
}

/// Extract the publication year from a catalogue file name (`...IAU2015.csv`).
pub fn year_from_file_name(path: &Utf8Path) -> Result<u16, IauWktError> {
    let file_name = path.file_name().unwrap_or(path.as_str());
    YEAR_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse::<u16>().ok())
        .ok_or_else(|| IauWktError::MalformedYear(path.to_string()))
}

/// One CRS of the output, tagged with the body it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CrsEntry {
    pub target: String,
    pub kind: CrsKind,
    pub crs: CrsDescriptor,
}

impl CrsEntry {
    fn new(target: &str, crs: CrsDescriptor) -> Self {
        CrsEntry {
            target: target.to_string(),
            kind: crs.kind(),
            crs,
        }
    }
}

pub struct IauCatalog {
    file: Option<Utf8PathBuf>,
    publication: Publication,
    dispatch: Dispatch,
}

impl IauCatalog {
    /// Open a catalogue file, deriving its publication from the file name.
    ///
    /// # Errors
    ///
    /// * [`IauWktError::MalformedYear`] – no `IAU<year>.` in the file name, or a year
    ///   before 2015,
    /// * [`IauWktError::UnknownPublicationYear`] – a year with no known report.
    pub fn new(file: &Utf8Path) -> Result<Self, IauWktError> {
        let year = year_from_file_name(file)?;
        if year < FIRST_SUPPORTED_YEAR {
            return Err(IauWktError::MalformedYear(format!(
                "{file}: this program is not valid before {FIRST_SUPPORTED_YEAR}"
            )));
        }
        let publication = Publication::try_from(year)?;

        Ok(IauCatalog {
            file: Some(file.to_owned()),
            publication,
            dispatch: Dispatch::none(),
        })
    }

    /// A catalogue without backing file, fed through [`IauCatalog::process_reader`]
    /// or [`IauCatalog::process_rows`].
    pub fn from_publication(publication: Publication) -> Self {
        IauCatalog {
            file: None,
            publication,
            dispatch: Dispatch::none(),
        }
    }

    /// Route the logs of this catalogue to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn publication(&self) -> Publication {
        self.publication
    }

    pub fn file(&self) -> Option<&Utf8Path> {
        self.file.as_deref()
    }

    /// Process the catalogue file given to [`IauCatalog::new`].
    pub fn process_file(&self) -> Result<Vec<CrsEntry>, IauWktError> {
        let file = self.file.as_ref().ok_or_else(|| {
            IauWktError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "catalogue has no backing file",
            ))
        })?;
        self.process_reader(File::open(file)?)
    }

    /// Process a catalogue read from any source.
    ///
    /// Rows are headerless and may have fewer than nine columns; a header line is
    /// rejected like any row whose identifier is not an integer. A record the CSV reader
    /// cannot decode (invalid UTF-8 for instance) is skipped; only I/O errors abort.
    pub fn process_reader<R: Read>(&self, reader: R) -> Result<Vec<CrsEntry>, IauWktError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.deserialize::<CatalogRow>() {
            match result {
                Ok(row) => rows.push(row),
                Err(error) if error.is_io_error() => return Err(error.into()),
                Err(error) => dispatcher::with_default(&self.dispatch, || {
                    warn!("Row is ignored: {error}")
                }),
            }
        }

        Ok(self.process_rows(rows))
    }

    /// Process already split rows, in order.
    pub fn process_rows<I>(&self, rows: I) -> Vec<CrsEntry>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        dispatcher::with_default(&self.dispatch, || {
            let mut data = Vec::new();
            for row in rows {
                match PhysicalRecord::try_from(&row) {
                    Ok(record) => match self.process_record(&record) {
                        Ok(entries) => data.extend(entries),
                        Err(error) => {
                            error!("Error when processing line: {error}")
                        }
                    },
                    Err(error) => warn!("{error}"),
                }
            }
            debug!("Exiting from process_rows with {} CRS", data.len());
            data
        })
    }

    /// Derive every CRS of one validated record.
    ///
    /// Only an ocentric failure is returned: ographic failures are logged and drop the
    /// ographic branch only.
    pub fn process_record(&self, record: &PhysicalRecord) -> Result<Vec<CrsEntry>, IauWktError> {
        dispatcher::with_default(&self.dispatch, || {
            let span = info_span!("row", naif_id = record.naif_id, body = %record.body);
            let _guard = span.enter();

            let pub_year = self.publication.year();
            let group = self.publication.authority_group();
            let target = record.body.as_str();

            let ocentric = ocentric::create(record, pub_year, group)?;

            let ographic = match ographic::create(record, pub_year, group) {
                Ok(crs) => Some(crs),
                Err(error @ IauWktError::OgraphicForbidden { .. }) => {
                    warn!("{error}");
                    None
                }
                Err(error) => {
                    error!("ographic CRS skipped: {error}");
                    None
                }
            };

            let projected_ocentric = projected::create_all(record, &ocentric, pub_year, group);
            let projected_ographic = ographic
                .as_ref()
                .map(|base| projected::create_all(record, base, pub_year, group))
                .unwrap_or_default();

            // each projection of the ocentric CRS is followed by its ographic sibling
            let entries: Vec<CrsEntry> = std::iter::once(ocentric)
                .chain(ographic)
                .chain(projected_ocentric.into_iter().interleave(projected_ographic))
                .map(|crs| CrsEntry::new(target, crs))
                .collect();

            debug!("{} CRS emitted", entries.len());
            Ok(entries)
        })
    }
}

#[cfg(test)]
mod test_catalog {
    use std::{
        io::{Cursor, Write},
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::record::test_record::{mars, row};

    #[test]
    fn test_year_from_file_name() {
        assert_eq!(
            year_from_file_name(Utf8Path::new("data/naifcodes_radii_m_wAsteroids_IAU2015.csv")),
            Ok(2015)
        );
        assert_eq!(
            year_from_file_name(Utf8Path::new("IAU2000.csv")),
            Ok(2000)
        );
        assert!(matches!(
            year_from_file_name(Utf8Path::new("naifcodes_radii.csv")),
            Err(IauWktError::MalformedYear(_))
        ));
        assert!(year_from_file_name(Utf8Path::new("IAU20a5.csv")).is_err());
    }

    #[test]
    fn test_catalog_year_checks() {
        assert!(matches!(
            IauCatalog::new(Utf8Path::new("naifcodes_IAU2009.csv")),
            Err(IauWktError::MalformedYear(_))
        ));
        assert!(matches!(
            IauCatalog::new(Utf8Path::new("naifcodes_IAU2018.csv")),
            Err(IauWktError::UnknownPublicationYear(2018))
        ));
        let catalog = IauCatalog::new(Utf8Path::new("naifcodes_IAU2015.csv")).unwrap();
        assert_eq!(catalog.publication(), Publication::Iau2015);
        assert_eq!(catalog.file(), Some(Utf8Path::new("naifcodes_IAU2015.csv")));
    }

    #[test]
    fn test_publications() {
        assert_eq!(Publication::Iau2000.authority_group(), "IAU_IAG");
        assert_eq!(Publication::Iau2015.authority_group(), "IAU");
        assert!(Publication::Iau2009
            .references()
            .starts_with("#IAU2009 WKT Codes\n"));
        assert_eq!(Publication::try_from(2009), Ok(Publication::Iau2009));
        assert_eq!(
            Publication::try_from(2012),
            Err(IauWktError::UnknownPublicationYear(2012))
        );
    }

    #[test]
    fn test_process_record_order() {
        let catalog = IauCatalog::from_publication(Publication::Iau2015);
        let entries = catalog.process_record(&mars()).unwrap();

        assert_eq!(entries.len(), 2 + 2 * projected::PROJECTIONS.len());
        assert_eq!(entries[0].kind, CrsKind::Ocentric);
        assert_eq!(entries[1].kind, CrsKind::Ographic);
        assert_eq!(entries[2].kind, CrsKind::ProjectedOcentric);
        assert_eq!(entries[3].kind, CrsKind::ProjectedOgraphic);
        assert_eq!(entries[2].crs.gis_code(), 49910);
        assert_eq!(entries[3].crs.gis_code(), 49911);
        assert!(entries.iter().all(|e| e.target == "Mars"));
    }

    #[test]
    fn test_process_rows_is_fail_soft() {
        let catalog = IauCatalog::from_publication(Publication::Iau2015);
        let rows = vec![
            row([
                "Naif_id", "Body", "Mean", "Semimajor", "Axisb", "Semiminor", "rotation",
                "origin_long_name", "origin_lon_pos",
            ]),
            row(["10", "Sun", "695700000.00", "695700000.00", "695700000.00", "695700000.00", "Direct", "", ""]),
            row(["1000012", "Borrelly", "-1", "-1", "-1", "-1", "", "", ""]),
            row(["599", "Jupiter", "69911000.00", "71492000.00", "71492000.00", "66854000.00", "Chaotic", "", ""]),
        ];

        let entries = catalog.process_rows(rows);
        let sun: Vec<_> = entries.iter().filter(|e| e.target == "Sun").collect();
        let jupiter: Vec<_> = entries.iter().filter(|e| e.target == "Jupiter").collect();

        // no ographic for the Sun, only ocentric branch for an unknown rotation
        assert_eq!(sun.len(), 1 + projected::PROJECTIONS.len());
        assert_eq!(jupiter.len(), 1 + projected::PROJECTIONS.len());
        assert!(entries.iter().all(|e| e.target != "Borrelly"));
        assert!(entries
            .iter()
            .all(|e| matches!(e.kind, CrsKind::Ocentric | CrsKind::ProjectedOcentric)));
    }

    const MARS_LINE: &str = "499,Mars,3389500.00,3396190.00,3396190.00,3376200.00,Direct,Airy-0,0\n";
    const PHOBOS_LINE: &str = "401,Phobos,11080.00,13000.00,11400.00,9100.00,Direct,,\n";

    #[test]
    fn test_oversized_naif_id_is_skipped() {
        let catalog = IauCatalog::from_publication(Publication::Iau2015);
        let data = format!("99999999999999999,Big,10.0,10.0,10.0,10.0,Direct,,\n{MARS_LINE}");
        let entries = catalog.process_reader(Cursor::new(data)).unwrap();

        assert_eq!(entries.len(), 2 + 2 * projected::PROJECTIONS.len());
        assert!(entries.iter().all(|e| e.target == "Mars"));
    }

    #[test]
    fn test_undecodable_record_is_skipped() {
        let catalog = IauCatalog::from_publication(Publication::Iau2015);
        let mut data = MARS_LINE.as_bytes().to_vec();
        data.extend_from_slice(b"999,Bad\xff,10.0,10.0,10.0,10.0,Direct,,\n");
        data.extend_from_slice(PHOBOS_LINE.as_bytes());

        let entries = catalog.process_reader(Cursor::new(data)).unwrap();

        let per_body = 2 + 2 * projected::PROJECTIONS.len();
        assert_eq!(entries.len(), 2 * per_body);
        assert_eq!(entries[0].target, "Mars");
        assert_eq!(entries[per_body].target, "Phobos");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_row_is_logged_once() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();
        let catalog = IauCatalog::from_publication(Publication::Iau2015)
            .with_dispatch(Dispatch::new(subscriber));

        let entries = catalog.process_rows(vec![row([
            "1000012", "Borrelly", "4220.00", "8000.00", "-1", "4000.00", "Direct", "", "",
        ])]);
        assert!(entries.is_empty());

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches("Row is ignored").count(), 1);
        assert!(text.contains("no axis b"));
    }
}
