use geo::Geometry;
use geojson::GeoJson;
use std::io::Write;

use crate::error::Result;

/// Convert a [`Geometry`] into a GeoJSON geometry object.
pub fn geometry_to_geojson(geometry: &Geometry) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(geometry))
}

/// Write a Feature or FeatureCollection as GeoJSON text, then flush `writer`.
pub fn write_geojson<W: Write>(geojson: &GeoJson, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, geojson)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::{feature, feature_collection};
    use crate::test::point;
    use crate::error::GeoFeatureError;
    use std::io::{self, BufWriter};

    /// Accepts every write, fails every flush.
    struct BrokenFlush(Vec<u8>);

    impl Write for BrokenFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "flush failed"))
        }
    }

    #[test]
    fn test_write() {
        let features = vec![
            feature(Some(&point::p0().into()), Default::default()),
            feature(None, Default::default()),
        ];
        let geojson = GeoJson::FeatureCollection(feature_collection(features));

        let mut output_buffer = Vec::new();
        let writer = BufWriter::new(&mut output_buffer);
        write_geojson(&geojson, writer).unwrap();

        let output: serde_json::Value = serde_json::from_slice(&output_buffer).unwrap();
        assert_eq!(output["type"], "FeatureCollection");
        assert_eq!(output["features"][0]["geometry"]["type"], "Point");
        assert_eq!(
            output["features"][0]["geometry"]["coordinates"],
            serde_json::json!([0.0, 1.0])
        );
        assert!(output["features"][1]["geometry"].is_null());
    }

    #[test]
    fn flush_errors_are_returned() {
        let geojson = GeoJson::FeatureCollection(feature_collection(vec![]));
        let mut sink = BrokenFlush(vec![]);
        let err = write_geojson(&geojson, &mut sink).unwrap_err();
        assert!(matches!(err, GeoFeatureError::IOError(_)));
        assert!(!sink.0.is_empty());
    }
}
