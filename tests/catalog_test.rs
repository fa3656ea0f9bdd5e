mod common;

use std::io::Cursor;

use camino::Utf8Path;
use common::{assert_ellipsoid_close, entries_for, load_catalog};
use iau_wkt::{
    classification::LongitudeDirection, crs::projected::PROJECTIONS, CrsKind, IauCatalog,
    IauWktError, Publication,
};

#[test]
fn test_catalog_from_file() {
    let (catalog, entries) = load_catalog();
    assert_eq!(catalog.publication(), Publication::Iau2015);

    let nb_projections = PROJECTIONS.len();
    // Sun, Venus and Moon have no ographic CRS
    let expected = 3 * (1 + nb_projections) + 5 * (2 + 2 * nb_projections);
    assert_eq!(entries.len(), expected);

    let targets: Vec<&str> = entries
        .iter()
        .map(|e| e.target.as_str())
        .fold(Vec::new(), |mut acc, target| {
            if acc.last() != Some(&target) {
                acc.push(target);
            }
            acc
        });
    assert_eq!(
        targets,
        vec!["Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Phobos", "Deimos"]
    );
}

#[test]
fn test_sentinel_rows_are_skipped() {
    let (_, entries) = load_catalog();
    assert!(entries_for(&entries, "Borrelly").is_empty());
    assert!(entries_for(&entries, "Halley").is_empty());
    // the row following the invalid one is still processed
    assert_eq!(entries_for(&entries, "Mars").len(), 2 + 2 * PROJECTIONS.len());
}

#[test]
fn test_one_ocentric_per_body() {
    let (_, entries) = load_catalog();
    for body in ["Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Phobos", "Deimos"] {
        let ocentric = entries_for(&entries, body)
            .into_iter()
            .filter(|e| e.kind == CrsKind::Ocentric)
            .count();
        assert_eq!(ocentric, 1, "{body}");
    }
}

#[test]
fn test_earth_and_mars() {
    let (_, entries) = load_catalog();

    let earth = entries_for(&entries, "Earth");
    assert_eq!(earth[0].crs.authority_code(), "2015:39900");
    assert_ellipsoid_close(&earth[0].crs, 6371008.4, 298.25700617732406);
    assert_eq!(earth[1].crs.authority_code(), "IAU:2015:39901");
    assert_eq!(earth[1].crs.longitude_direction(), LongitudeDirection::West);

    let mars = entries_for(&entries, "Mars");
    let codes: Vec<i64> = mars.iter().take(4).map(|e| e.crs.gis_code()).collect();
    assert_eq!(codes, vec![49900, 49901, 49910, 49911]);
    assert_eq!(mars.last().map(|e| e.kind), Some(CrsKind::ProjectedOgraphic));
}

#[test]
fn test_triaxial_bodies() {
    let (_, entries) = load_catalog();
    for body in ["Phobos", "Deimos"] {
        let crs = entries_for(&entries, body);
        assert!(crs.iter().all(|e| e.crs.is_triaxial()), "{body}");
        assert_eq!(crs[1].crs.radius(), 1.0);
    }
}

#[test]
fn test_processing_is_deterministic() {
    let (_, first) = load_catalog();
    let (_, second) = load_catalog();
    assert_eq!(first, second);

    let first_wkt: Vec<String> = first.iter().map(|e| e.crs.to_wkt()).collect();
    let second_wkt: Vec<String> = second.iter().map(|e| e.crs.to_wkt()).collect();
    assert_eq!(first_wkt, second_wkt);
}

#[test]
fn test_process_reader_without_header() {
    let catalog = IauCatalog::from_publication(Publication::Iau2000);
    let data = "499,Mars,3389500.00,3396190.00,3396190.00,3376200.00,Direct\n";
    let entries = catalog.process_reader(Cursor::new(data)).unwrap();

    assert_eq!(entries.len(), 2 + 2 * PROJECTIONS.len());
    assert_eq!(entries[0].crs.geographic_name(), "Mars 2000 ocentric");
    assert_eq!(entries[0].crs.ellipsoid_name(), "Mars_2000_IAU_IAG");
    assert_eq!(entries[0].crs.authority_name(), "IAU_IAG");
    assert_eq!(entries[1].crs.authority_code(), "IAU:2000:49901");
}

#[test]
fn test_catalog_level_errors() {
    assert!(matches!(
        IauCatalog::new(Utf8Path::new("tests/data/naifcodes_radii.csv")),
        Err(IauWktError::MalformedYear(_))
    ));
    assert!(matches!(
        IauCatalog::new(Utf8Path::new("tests/data/naifcodes_IAU2000.csv")),
        Err(IauWktError::MalformedYear(_))
    ));

    let missing = IauCatalog::new(Utf8Path::new("tests/data/missing_IAU2015.csv")).unwrap();
    assert!(matches!(missing.process_file(), Err(IauWktError::IoError(_))));
}
