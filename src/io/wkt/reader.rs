use std::str::FromStr;

use geo::Geometry;

use crate::error::{GeoFeatureError, Result};
use crate::io::GeometryParser;

/// Parse a WKT string into a [`Geometry`].
///
/// ```
/// use geofeature::io::wkt::parse_wkt;
///
/// let geom = parse_wkt("POINT (1 2)").unwrap();
/// assert!(matches!(geom, geo::Geometry::Point(_)));
/// ```
pub fn parse_wkt(raw: &str) -> Result<Geometry> {
    let wkt = wkt::Wkt::<f64>::from_str(raw.trim())
        .map_err(|e| GeoFeatureError::GeometryParse(format!("invalid WKT {raw:?}: {e}")))?;
    Geometry::try_from(wkt)
        .map_err(|e| GeoFeatureError::GeometryParse(format!("unsupported WKT {raw:?}: {e:?}")))
}

/// The default [`GeometryParser`]: reads Well-Known Text.
///
/// WKT parsing holds no process-wide state, so there is nothing to initialize first.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktParser;

impl GeometryParser for WktParser {
    fn parse(&self, raw: &str) -> Result<Geometry> {
        parse_wkt(raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{line_string, point};

    #[test]
    fn parse_point() {
        let geom = parse_wkt("POINT (0 1)").unwrap();
        assert_eq!(geom, Geometry::Point(point!(x: 0., y: 1.)));
    }

    #[test]
    fn parse_linestring_with_whitespace() {
        let geom = WktParser.parse("  LINESTRING (0 0, 1 1)\n").unwrap();
        assert_eq!(
            geom,
            Geometry::LineString(line_string![(x: 0., y: 0.), (x: 1., y: 1.)])
        );
    }

    #[test]
    fn parse_polygon() {
        let geom = parse_wkt("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
        assert!(matches!(geom, Geometry::Polygon(_)));
    }

    #[test]
    fn malformed() {
        let err = parse_wkt("POINT (1").unwrap_err();
        assert!(matches!(err, GeoFeatureError::GeometryParse(_)));

        let err = parse_wkt("not wkt at all").unwrap_err();
        assert!(matches!(err, GeoFeatureError::GeometryParse(_)));
    }
}
