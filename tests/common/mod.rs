use approx::assert_relative_eq;
use camino::Utf8Path;
use iau_wkt::{CrsDescriptor, CrsEntry, IauCatalog};

pub const CATALOG_2015: &str = "tests/data/naifcodes_radii_m_wAsteroids_IAU2015.csv";

pub fn load_catalog() -> (IauCatalog, Vec<CrsEntry>) {
    let catalog = IauCatalog::new(Utf8Path::new(CATALOG_2015)).unwrap();
    let entries = catalog.process_file().unwrap();
    (catalog, entries)
}

pub fn entries_for<'a>(entries: &'a [CrsEntry], body: &str) -> Vec<&'a CrsEntry> {
    entries.iter().filter(|e| e.target == body).collect()
}

pub fn assert_ellipsoid_close(crs: &CrsDescriptor, radius: f64, inverse_flattening: f64) {
    assert_relative_eq!(crs.radius(), radius, epsilon = 1e-9);
    assert_relative_eq!(
        crs.inverse_flattening(),
        inverse_flattening,
        epsilon = 1e-6
    );
}
