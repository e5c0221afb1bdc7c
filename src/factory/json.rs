//! Built-in factories for items that are JSON objects.

use geojson::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GeoFeatureError, Result};
use crate::factory::FeatureFactory;
use crate::geometry::GeometryInput;
use crate::io::geojson::{geometry_from_json_value, GeoJsonParser};
use crate::io::GeometryParser;

fn from_args<T: for<'de> Deserialize<'de>>(kind: &str, args: &Value) -> Result<T> {
    serde_json::from_value(args.clone())
        .map_err(|e| GeoFeatureError::InvalidFactory(format!("{kind}: {e}").into()))
}

fn require_field(kind: &str, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GeoFeatureError::InvalidFactory(
            format!("{kind}: `{name}` must not be empty").into(),
        ));
    }
    Ok(())
}

/// Id of `item` read from `field`; strings are used as-is, numbers are formatted.
fn field_id(item: &Value, field: Option<&str>) -> Option<String> {
    match item.get(field?)? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// The `selected` fields of `item`, or every field except `exclude` when no selection is
/// given. Missing selected fields are skipped.
fn field_properties(item: &Value, selected: Option<&[String]>, exclude: &[&str]) -> JsonObject {
    let Some(object) = item.as_object() else {
        return JsonObject::new();
    };
    match selected {
        Some(fields) => fields
            .iter()
            .filter_map(|field| Some((field.clone(), object.get(field)?.clone())))
            .collect(),
        None => object
            .iter()
            .filter(|(key, _)| !exclude.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads a WKT geometry, or an array of them, from one field of each item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WktFieldFactory {
    /// Field holding the WKT value.
    pub geometry_field: String,

    /// Field holding the item id.
    #[serde(default)]
    pub id_field: Option<String>,

    /// Fields copied into the properties. Defaults to every non-geometry field.
    #[serde(default)]
    pub properties: Option<Vec<String>>,
}

impl WktFieldFactory {
    /// Kind under which this factory is registered.
    pub const KIND: &'static str = "wkt_field";

    /// Create a factory reading `geometry_field`.
    pub fn new(geometry_field: impl Into<String>) -> Self {
        Self {
            geometry_field: geometry_field.into(),
            id_field: None,
            properties: None,
        }
    }

    /// Use `id_field` as the item id.
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = Some(id_field.into());
        self
    }

    /// Build from registry arguments.
    pub fn from_args(args: &Value) -> Result<Self> {
        let factory: Self = from_args(Self::KIND, args)?;
        require_field(Self::KIND, "geometry_field", &factory.geometry_field)?;
        Ok(factory)
    }

    fn to_input(&self, value: &Value) -> Result<Option<GeometryInput>> {
        match value {
            Value::Null => Ok(None),
            Value::String(wkt) => Ok(Some(GeometryInput::Raw(wkt.clone()))),
            Value::Array(values) => {
                let mut inputs = Vec::with_capacity(values.len());
                for value in values {
                    inputs.extend(self.to_input(value)?);
                }
                Ok(Some(GeometryInput::Sequence(inputs)))
            }
            other => Err(GeoFeatureError::GeometryParse(format!(
                "field `{}` holds {}, expected WKT",
                self.geometry_field,
                json_type(other)
            ))),
        }
    }
}

impl FeatureFactory<Value> for WktFieldFactory {
    fn geometry(&self, item: &Value) -> Result<Option<GeometryInput>> {
        match item.get(&self.geometry_field) {
            Some(value) => self.to_input(value),
            None => Ok(None),
        }
    }

    fn properties(&self, item: &Value) -> Result<JsonObject> {
        Ok(field_properties(
            item,
            self.properties.as_deref(),
            &[self.geometry_field.as_str()],
        ))
    }

    fn id(&self, item: &Value) -> Option<String> {
        field_id(item, self.id_field.as_deref())
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}

/// Reads a GeoJSON geometry, or an array of them, from one field of each item.
///
/// The field may hold a geometry object or GeoJSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoJsonFieldFactory {
    /// Field holding the GeoJSON geometry.
    pub geometry_field: String,

    /// Field holding the item id.
    #[serde(default)]
    pub id_field: Option<String>,

    /// Fields copied into the properties. Defaults to every non-geometry field.
    #[serde(default)]
    pub properties: Option<Vec<String>>,
}

impl GeoJsonFieldFactory {
    /// Kind under which this factory is registered.
    pub const KIND: &'static str = "geojson_field";

    /// Create a factory reading `geometry_field`.
    pub fn new(geometry_field: impl Into<String>) -> Self {
        Self {
            geometry_field: geometry_field.into(),
            id_field: None,
            properties: None,
        }
    }

    /// Build from registry arguments.
    pub fn from_args(args: &Value) -> Result<Self> {
        let factory: Self = from_args(Self::KIND, args)?;
        require_field(Self::KIND, "geometry_field", &factory.geometry_field)?;
        Ok(factory)
    }

    fn to_input(&self, value: &Value) -> Result<Option<GeometryInput>> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) if text.trim().is_empty() => Ok(None),
            Value::String(text) => Ok(Some(GeoJsonParser.parse(text)?.into())),
            Value::Object(_) => Ok(Some(geometry_from_json_value(value)?.into())),
            Value::Array(values) => {
                let mut inputs = Vec::with_capacity(values.len());
                for value in values {
                    inputs.extend(self.to_input(value)?);
                }
                Ok(Some(GeometryInput::Sequence(inputs)))
            }
            other => Err(GeoFeatureError::GeometryParse(format!(
                "field `{}` holds {}, expected GeoJSON",
                self.geometry_field,
                json_type(other)
            ))),
        }
    }
}

impl FeatureFactory<Value> for GeoJsonFieldFactory {
    fn geometry(&self, item: &Value) -> Result<Option<GeometryInput>> {
        match item.get(&self.geometry_field) {
            Some(value) => self.to_input(value),
            None => Ok(None),
        }
    }

    fn properties(&self, item: &Value) -> Result<JsonObject> {
        Ok(field_properties(
            item,
            self.properties.as_deref(),
            &[self.geometry_field.as_str()],
        ))
    }

    fn id(&self, item: &Value) -> Option<String> {
        field_id(item, self.id_field.as_deref())
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}

/// Builds a Point from two numeric fields of each item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinateFactory {
    /// Field holding the x (longitude) coordinate.
    pub x_field: String,

    /// Field holding the y (latitude) coordinate.
    pub y_field: String,

    /// Field holding the item id.
    #[serde(default)]
    pub id_field: Option<String>,

    /// Fields copied into the properties. Defaults to every non-coordinate field.
    #[serde(default)]
    pub properties: Option<Vec<String>>,
}

impl CoordinateFactory {
    /// Kind under which this factory is registered.
    pub const KIND: &'static str = "coordinates";

    /// Create a factory reading `x_field` and `y_field`.
    pub fn new(x_field: impl Into<String>, y_field: impl Into<String>) -> Self {
        Self {
            x_field: x_field.into(),
            y_field: y_field.into(),
            id_field: None,
            properties: None,
        }
    }

    /// Build from registry arguments.
    pub fn from_args(args: &Value) -> Result<Self> {
        let factory: Self = from_args(Self::KIND, args)?;
        require_field(Self::KIND, "x_field", &factory.x_field)?;
        require_field(Self::KIND, "y_field", &factory.y_field)?;
        Ok(factory)
    }

    fn coordinate(&self, field: &str, value: &Value) -> Result<f64> {
        value.as_f64().ok_or_else(|| {
            GeoFeatureError::GeometryParse(format!(
                "field `{field}` holds {}, expected a number",
                json_type(value)
            ))
        })
    }
}

impl FeatureFactory<Value> for CoordinateFactory {
    fn geometry(&self, item: &Value) -> Result<Option<GeometryInput>> {
        let x = item.get(&self.x_field).filter(|value| !value.is_null());
        let y = item.get(&self.y_field).filter(|value| !value.is_null());
        match (x, y) {
            (None, None) => Ok(None),
            (Some(x), Some(y)) => {
                let x = self.coordinate(&self.x_field, x)?;
                let y = self.coordinate(&self.y_field, y)?;
                Ok(Some(geo::point!(x: x, y: y).into()))
            }
            (Some(_), None) => Err(GeoFeatureError::GeometryParse(format!(
                "field `{}` is missing",
                self.y_field
            ))),
            (None, Some(_)) => Err(GeoFeatureError::GeometryParse(format!(
                "field `{}` is missing",
                self.x_field
            ))),
        }
    }

    fn properties(&self, item: &Value) -> Result<JsonObject> {
        Ok(field_properties(
            item,
            self.properties.as_deref(),
            &[self.x_field.as_str(), self.y_field.as_str()],
        ))
    }

    fn id(&self, item: &Value) -> Option<String> {
        field_id(item, self.id_field.as_deref())
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}
