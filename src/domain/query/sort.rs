use serde_json::{Map, Value};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::schema::CollectionSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    pub keys: Vec<SortKey>,
}

impl Sort {
    /// Parses the `sort` parameter.
    ///
    /// A value starting with `{` is a JSON object of `field: 1 | -1 | "asc" | "desc"`.
    /// Anything else is a literal list like `name,-average_cost` (commas or spaces).
    /// Fields unknown to the collection are dropped, and an empty result falls back
    /// to `default_sort`, which is always literal.
    pub fn parse(schema: &CollectionSchema, raw: Option<&str>, default_sort: &str) -> AppResult<Self> {
        let sort = match raw.map(str::trim) {
            Some(raw) if raw.starts_with('{') => Self::from_json(schema, raw)?,
            Some(raw) => Self::from_literal(schema, raw),
            None => Self::default(),
        };

        if sort.keys.is_empty() {
            return Ok(Self::from_literal(schema, default_sort));
        }
        Ok(sort)
    }

    fn from_literal(schema: &CollectionSchema, raw: &str) -> Self {
        let keys = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let (name, direction) = match token.strip_prefix('-') {
                    Some(name) => (name, SortDirection::Descending),
                    None => (token.strip_prefix('+').unwrap_or(token), SortDirection::Ascending),
                };
                schema.field(name).map(|f| SortKey {
                    field: f.name,
                    direction,
                })
            });
        Self::dedup(keys)
    }

    fn from_json(schema: &CollectionSchema, raw: &str) -> AppResult<Self> {
        let spec: Map<String, Value> =
            serde_json::from_str(raw).map_err(|e| AppError::MalformedSort(e.to_string()))?;

        let mut keys = Vec::with_capacity(spec.len());
        for (name, value) in spec.iter() {
            let direction = json_direction(value)
                .ok_or_else(|| AppError::MalformedSort(format!("Invalid sort value `{}` for `{}`", value, name)))?;
            if let Some(field) = schema.field(name) {
                keys.push(SortKey {
                    field: field.name,
                    direction,
                });
            }
        }
        Ok(Self::dedup(keys))
    }

    fn dedup(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut unique: Vec<SortKey> = Vec::new();
        for key in keys {
            if !unique.iter().any(|k| k.field == key.field) {
                unique.push(key);
            }
        }
        Self { keys: unique }
    }
}

fn json_direction(value: &Value) -> Option<SortDirection> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v > 0.0 => Some(SortDirection::Ascending),
            Some(v) if v < 0.0 => Some(SortDirection::Descending),
            _ => None,
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        },
        _ => None,
    }
}
