//! Read geometries from [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry).

pub use reader::{parse_wkt, WktParser};

mod reader;
