//! JSON reader and writer for data sources.

use super::source::{Column, ColumnData, ColumnDataSource, SourceRef};
use super::value::Value;
use crate::error::{DatasnapError, Result};
use ndarray::{ArrayD, IxDyn};
use serde_json::{Map, Number, Value as Json};
use std::collections::BTreeMap;
use std::path::Path;

/// Data source reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read data sources from a file.
    pub fn read_file(path: &Path) -> Result<Vec<SourceRef>> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match extension {
            "json" => Self::read_json(path),
            other => Err(DatasnapError::unsupported_format(other)),
        }
    }

    fn read_json(path: &Path) -> Result<Vec<SourceRef>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DatasnapError::file_open(path.to_path_buf(), e))?;
        let sources = Self::parse_str(&text)?;
        tracing::info!("Read {} source(s) from {}", sources.len(), path.display());
        Ok(sources)
    }

    /// Parse sources from JSON text.
    ///
    /// Accepts `{"sources": [{"name": .., "data": {..}}, ..]}` or a bare column
    /// mapping, which becomes a single unnamed source.
    pub fn parse_str(text: &str) -> Result<Vec<SourceRef>> {
        let root: Json = serde_json::from_str(text)?;
        let Json::Object(root) = root else {
            return Err(DatasnapError::invalid_source(
                "<root>",
                "top level must be an object",
            ));
        };

        match root.get("sources") {
            Some(Json::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| Self::read_source(index, entry))
                .collect(),
            Some(_) => Err(DatasnapError::invalid_source(
                "<root>",
                "'sources' must be an array",
            )),
            None => {
                let data = Self::read_columns("<root>", &root)?;
                Ok(vec![ColumnDataSource::new(data).into_shared()])
            },
        }
    }

    fn read_source(index: usize, entry: &Json) -> Result<SourceRef> {
        let label = format!("#{}", index);
        let Json::Object(fields) = entry else {
            return Err(DatasnapError::invalid_source(label, "entry must be an object"));
        };

        let name = match fields.get("name") {
            Some(Json::String(name)) => Some(name.clone()),
            Some(_) => return Err(DatasnapError::invalid_source(label, "'name' must be a string")),
            None => None,
        };
        let label = name.clone().unwrap_or(label);

        let data = match fields.get("data") {
            Some(Json::Object(columns)) => Self::read_columns(&label, columns)?,
            Some(_) => return Err(DatasnapError::invalid_source(label, "'data' must be an object")),
            None => ColumnData::new(),
        };

        let source = match name {
            Some(name) => ColumnDataSource::named(name, data),
            None => ColumnDataSource::new(data),
        };
        Ok(source.into_shared())
    }

    fn read_columns(label: &str, columns: &Map<String, Json>) -> Result<ColumnData> {
        let mut data = ColumnData::new();
        for (name, column) in columns {
            let Json::Array(cells) = column else {
                return Err(DatasnapError::invalid_source(
                    label,
                    format!("column '{}' must be an array", name),
                ));
            };
            data.insert(name.clone(), cells.iter().map(json_to_value).collect());
        }
        Ok(data)
    }
}

/// Convert one JSON cell into a [`Value`].
///
/// Rectangular arrays whose leaves are all floats become buffers. Arrays with
/// integer leaves stay arrays so integers are written back unchanged.
pub fn json_to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number_to_value(n),
        Json::String(s) => Value::str(s),
        Json::Array(items) => match numeric_buffer(items) {
            Some(buffer) => Value::buffer(buffer),
            None => Value::array(items.iter().map(json_to_value).collect()),
        },
        Json::Object(map) => Value::object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_value(v)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Try to read a nested JSON array as a rectangular float buffer.
fn numeric_buffer(items: &[Json]) -> Option<ArrayD<f64>> {
    if items.is_empty() {
        return None;
    }

    let mut shape = Vec::new();
    let mut level = items;
    loop {
        shape.push(level.len());
        match level.first() {
            Some(Json::Array(inner)) if !inner.is_empty() => level = inner,
            Some(Json::Number(_)) => break,
            _ => return None,
        }
    }

    let mut flat = Vec::with_capacity(shape.iter().product());
    if !flatten_numbers(items, &shape, &mut flat) {
        return None;
    }
    ArrayD::from_shape_vec(IxDyn(&shape), flat).ok()
}

fn flatten_numbers(items: &[Json], shape: &[usize], out: &mut Vec<f64>) -> bool {
    let Some((&len, rest)) = shape.split_first() else {
        return false;
    };
    if items.len() != len {
        return false;
    }
    for item in items {
        let ok = match item {
            Json::Number(n) if rest.is_empty() && n.is_f64() => {
                out.push(n.as_f64().unwrap_or(f64::NAN));
                true
            },
            Json::Array(inner) if !rest.is_empty() => flatten_numbers(inner, rest, out),
            _ => false,
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Convert a [`Value`] back to JSON.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Float(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
        Value::Str(s) => Json::String(s.to_string()),
        Value::Array(items) => Json::Array(items.borrow().iter().map(value_to_json).collect()),
        Value::Buffer(data) => {
            let data = data.borrow();
            nested_json(data.shape(), &mut data.iter().copied())
        },
        Value::Object(map) => Json::Object(
            map.borrow()
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

fn nested_json(shape: &[usize], values: &mut impl Iterator<Item = f64>) -> Json {
    match shape.split_first() {
        None => values
            .next()
            .and_then(Number::from_f64)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Some((&len, rest)) => Json::Array((0..len).map(|_| nested_json(rest, values)).collect()),
    }
}

fn column_to_json(column: &Column) -> Json {
    Json::Array(column.iter().map(value_to_json).collect())
}

/// Serialize sources into the `{"sources": [...]}` layout.
pub fn sources_to_json(sources: &[SourceRef]) -> Json {
    let entries = sources
        .iter()
        .map(|source| {
            let source = source.borrow();
            let mut entry = Map::new();
            if let Some(name) = source.name() {
                entry.insert("name".to_string(), Json::String(name.to_string()));
            }
            let data: Map<String, Json> = source
                .data()
                .iter()
                .map(|(name, column)| (name.clone(), column_to_json(column)))
                .collect();
            entry.insert("data".to_string(), Json::Object(data));
            Json::Object(entry)
        })
        .collect();

    let mut root = Map::new();
    root.insert("sources".to_string(), Json::Array(entries));
    Json::Object(root)
}
