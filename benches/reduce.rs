use geo::polygon;

use criterion::{criterion_group, criterion_main, Criterion};
use geofeature::algorithm::GeometryReducer;
use geofeature::factory::WktFieldFactory;
use geofeature::geometry::GeometryInput;
use geofeature::resource::Resource;
use serde_json::json;

fn create_data() -> Vec<geo::Polygon> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    vec![poly; 1000]
}

fn create_items() -> Vec<serde_json::Value> {
    (0..1000)
        .map(|i| json!({"id": i, "geom": format!("POINT ({i} {i})")}))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let reducer = GeometryReducer::default();
    let polygons = GeometryInput::from(create_data());
    let raw = GeometryInput::from(vec!["MULTIPOINT ((0 0), (1 1))"; 1000]);

    c.bench_function("reduce 1000 polygons to MultiPolygon", |b| {
        b.iter(|| {
            let _ = reducer.reduce(&polygons);
        })
    });

    c.bench_function("reduce 1000 WKT MultiPoints", |b| {
        b.iter(|| {
            let _ = reducer.reduce(&raw);
        })
    });

    c.bench_function("process resource of 1000 WKT items", |b| {
        b.iter(|| {
            let factory = WktFieldFactory::new("geom");
            let mut resource = Resource::new("/", "/", factory, create_items());
            let _ = resource.geojson(false);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
