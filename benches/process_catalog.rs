use std::{fs, hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, Criterion};

use iau_wkt::{output::save_as_wkt, IauCatalog, Publication};

const CATALOG_2015: &str = "tests/data/naifcodes_radii_m_wAsteroids_IAU2015.csv";

fn bench_process_catalog(c: &mut Criterion) {
    let data = fs::read_to_string(CATALOG_2015).expect("fixture catalogue");
    let catalog = IauCatalog::from_publication(Publication::Iau2015);

    c.bench_function("process_reader", |b| {
        b.iter(|| {
            let entries = catalog
                .process_reader(Cursor::new(black_box(data.as_bytes())))
                .unwrap();
            black_box(entries)
        })
    });

    let entries = catalog
        .process_reader(Cursor::new(data.as_bytes()))
        .unwrap();
    c.bench_function("save_as_wkt", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            save_as_wkt(black_box(&entries), Publication::Iau2015, &mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_process_catalog);
criterion_main!(benches);
