use geo::{Coord, CoordsIter, Geometry};

use crate::error::{GeoFeatureError, Result};

/// Running bounds of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    /// New, empty bounds.
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    /// Returns `true` until a coordinate has been added.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }

    pub fn add_coord(&mut self, coord: Coord) {
        if coord.x < self.minx {
            self.minx = coord.x;
        }
        if coord.y < self.miny {
            self.miny = coord.y;
        }
        if coord.x > self.maxx {
            self.maxx = coord.x;
        }
        if coord.y > self.maxy {
            self.maxy = coord.y;
        }
    }

    pub fn add_geometry(&mut self, geom: &Geometry) {
        for coord in geom.coords_iter() {
            self.add_coord(coord);
        }
    }

    /// `[minx, miny, maxx, maxy]`, or `None` if nothing was added.
    pub fn to_array(&self) -> Option<[f64; 4]> {
        if self.is_empty() {
            None
        } else {
            Some([self.minx, self.miny, self.maxx, self.maxy])
        }
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds of `geom` as `[minx, miny, maxx, maxy]`.
///
/// Fails with [`GeoFeatureError::EmptyGeometry`] if the geometry has no coordinates.
pub fn bounding_box(geom: &Geometry) -> Result<[f64; 4]> {
    let mut rect = BoundingRect::new();
    rect.add_geometry(geom);
    rect.to_array().ok_or(GeoFeatureError::EmptyGeometry)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, mixed, point};
    use approx::assert_relative_eq;
    use geo::{GeometryCollection, MultiPoint};

    #[test]
    fn point_bounds() {
        let bbox = bounding_box(&point::p1().into()).unwrap();
        assert_eq!(bbox, [1., 2., 1., 2.]);
    }

    #[test]
    fn collection_bounds() {
        let collection = Geometry::GeometryCollection(mixed::collection());
        let bbox = bounding_box(&collection).unwrap();
        let [minx, miny, maxx, maxy] = bbox;
        assert_relative_eq!(minx, 0.0);
        assert_relative_eq!(miny, 0.0);
        assert_relative_eq!(maxx, 5.0);
        assert_relative_eq!(maxy, 5.0);
    }

    #[test]
    fn accumulates_across_geometries() {
        let mut rect = BoundingRect::new();
        assert!(rect.is_empty());
        rect.add_geometry(&linestring::ls0().into());
        rect.add_geometry(&point::p2().into());
        assert_eq!(rect.to_array(), Some([0., 1., 2., 3.]));
    }

    #[test]
    fn empty_geometry() {
        let empty = Geometry::GeometryCollection(GeometryCollection::new_from(vec![]));
        assert!(matches!(
            bounding_box(&empty),
            Err(GeoFeatureError::EmptyGeometry)
        ));
        let empty = Geometry::MultiPoint(MultiPoint::new(vec![]));
        assert!(bounding_box(&empty).is_err());
    }
}
