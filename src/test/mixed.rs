use geo::{line_string, point, polygon, Geometry, GeometryCollection};

/// A flat collection of one Point, one LineString and one Polygon.
pub(crate) fn collection() -> GeometryCollection {
    GeometryCollection::new_from(vec![
        Geometry::Point(point!(x: 0., y: 0.)),
        Geometry::LineString(line_string![(x: 1., y: 1.), (x: 5., y: 5.)]),
        Geometry::Polygon(polygon![
            (x: 2., y: 2.),
            (x: 4., y: 2.),
            (x: 4., y: 4.),
            (x: 2., y: 2.),
        ]),
    ])
}
