use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::schema::{CollectionSchema, FieldKind};
use crate::domain::query::RESERVED_KEYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FilterOperator {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "eq" => Some(Self::Eq),
            "ne" => Some(Self::Ne),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    pub fn is_ordering(&self) -> bool {
        matches!(self, Self::Gt | Self::Gte | Self::Lt | Self::Lte)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl FilterValue {
    /// Parses a raw query-string value for a field of the given kind.
    /// Array fields compare against their elements, so they parse as text.
    pub fn parse(kind: FieldKind, raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match kind {
            FieldKind::Text | FieldKind::TextArray => Some(Self::Text(raw.to_string())),
            FieldKind::Integer => raw.parse().ok().map(Self::Integer),
            FieldKind::Float => raw.parse().ok().map(Self::Float),
            FieldKind::Boolean => raw.parse().ok().map(Self::Boolean),
            FieldKind::Uuid => Uuid::parse_str(raw).ok().map(Self::Uuid),
            FieldKind::Timestamp => parse_timestamp(raw).map(Self::Timestamp),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: &'static str,
    pub kind: FieldKind,
    pub operator: FilterOperator,
    pub values: Vec<FilterValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Filter {
    /// Builds the filter mapping from query parameters.
    ///
    /// Accepts `field=value` and `field[op]=value`. Reserved keys, unknown fields,
    /// hidden fields and unknown operators are skipped. A value that does not parse
    /// for its field's kind is rejected.
    pub fn from_params(schema: &CollectionSchema, params: &[(String, String)]) -> AppResult<Self> {
        let mut conditions = Vec::new();

        for (key, raw) in params {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            let Some((name, operator)) = split_key(key) else {
                continue;
            };
            let Some(field) = schema.field(name) else {
                continue;
            };
            if field.kind == FieldKind::TextArray && operator.is_ordering() {
                continue;
            }

            let parts: Vec<&str> = match operator {
                FilterOperator::In => raw.split(',').filter(|p| !p.trim().is_empty()).collect(),
                _ => vec![raw.as_str()],
            };
            let values = parts
                .into_iter()
                .map(|p| {
                    FilterValue::parse(field.kind, p).ok_or_else(|| AppError::InvalidFilter {
                        field: key.clone(),
                        value: raw.clone(),
                    })
                })
                .collect::<AppResult<Vec<_>>>()?;

            conditions.push(Condition {
                field: field.name,
                kind: field.kind,
                operator,
                values,
            });
        }

        Ok(Self { conditions })
    }

    /// Scopes the collection to records whose `field` equals `value`.
    pub fn scoped(schema: &CollectionSchema, field: &str, value: FilterValue) -> Self {
        let conditions = schema
            .field(field)
            .map(|f| Condition {
                field: f.name,
                kind: f.kind,
                operator: FilterOperator::Eq,
                values: vec![value],
            })
            .into_iter()
            .collect();
        Self { conditions }
    }

    pub fn and(mut self, other: Filter) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

fn split_key(key: &str) -> Option<(&str, FilterOperator)> {
    match key.split_once('[') {
        None => Some((key, FilterOperator::Eq)),
        Some((name, rest)) => {
            let suffix = rest.strip_suffix(']')?;
            FilterOperator::from_suffix(suffix).map(|op| (name, op))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::Uuid;

    use crate::application::app_error::AppError;
    use crate::domain::entities::bootcamp::BOOTCAMPS;
    use crate::domain::entities::course::COURSES;
    use crate::domain::entities::schema::FieldKind;
    use crate::domain::entities::user::USERS;
    use crate::domain::query::filter::{Filter, FilterOperator, FilterValue};

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[rstest]
    fn test_reserved_keys_are_not_filters() {
        let filter = Filter::from_params(
            &BOOTCAMPS,
            &params(&[("select", "name"), ("sort", "name"), ("page", "2"), ("limit", "5")]),
        )
        .unwrap();
        assert!(filter.is_empty());
    }

    #[rstest]
    #[case("unknown")]
    #[case("name[regex]")]
    #[case("name[gt")]
    #[case("password")]
    fn test_unrecognised_keys_are_ignored(#[case] key: &str) {
        let filter = Filter::from_params(&USERS, &params(&[(key, "x")])).unwrap();
        assert!(filter.is_empty());
    }

    #[rstest]
    fn test_equality_filter_on_known_field() {
        let filter = Filter::from_params(&BOOTCAMPS, &params(&[("housing", "true"), ("foo", "bar")])).unwrap();

        assert_eq!(filter.conditions.len(), 1);
        let condition = &filter.conditions[0];
        assert_eq!(condition.field, "housing");
        assert_eq!(condition.operator, FilterOperator::Eq);
        assert_eq!(condition.values, vec![FilterValue::Boolean(true)]);
    }

    #[rstest]
    #[case("average_cost[lte]", FilterOperator::Lte)]
    #[case("average_cost[gte]", FilterOperator::Gte)]
    #[case("average_cost[lt]", FilterOperator::Lt)]
    #[case("average_cost[gt]", FilterOperator::Gt)]
    #[case("average_cost[ne]", FilterOperator::Ne)]
    fn test_operator_filters(#[case] key: &str, #[case] expected: FilterOperator) {
        let filter = Filter::from_params(&BOOTCAMPS, &params(&[(key, "10000")])).unwrap();
        assert_eq!(filter.conditions[0].operator, expected);
        assert_eq!(filter.conditions[0].values, vec![FilterValue::Float(10000.0)]);
    }

    #[rstest]
    fn test_in_filter_splits_values() {
        let filter =
            Filter::from_params(&COURSES, &params(&[("minimum_skill[in]", "beginner, advanced,")])).unwrap();
        assert_eq!(
            filter.conditions[0].values,
            vec![
                FilterValue::Text("beginner".to_string()),
                FilterValue::Text("advanced".to_string())
            ]
        );
    }

    #[rstest]
    fn test_ordering_operator_on_array_field_is_ignored() {
        let filter = Filter::from_params(&BOOTCAMPS, &params(&[("careers[gt]", "Business")])).unwrap();
        assert!(filter.is_empty());
    }

    #[rstest]
    #[case("weeks", "many")]
    #[case("bootcamp", "5d713995b721c3bb38c1f5d0")]
    #[case("created_at[gte]", "yesterday")]
    fn test_unparsable_value_is_rejected(#[case] key: &str, #[case] value: &str) {
        let result = Filter::from_params(&COURSES, &params(&[(key, value)]));
        assert!(matches!(result, Err(AppError::InvalidFilter { .. })));
    }

    #[rstest]
    #[case("2024-03-01T10:00:00Z")]
    #[case("2024-03-01")]
    fn test_timestamp_values(#[case] raw: &str) {
        assert!(matches!(
            FilterValue::parse(FieldKind::Timestamp, raw),
            Some(FilterValue::Timestamp(_))
        ));
    }

    #[rstest]
    fn test_scoped_filter_combines_with_request_filter() {
        let bootcamp_id = Uuid::now_v7();
        let request = Filter::from_params(&COURSES, &params(&[("weeks[gte]", "6")])).unwrap();
        let filter = Filter::scoped(&COURSES, "bootcamp", FilterValue::Uuid(bootcamp_id)).and(request);

        assert_eq!(filter.conditions.len(), 2);
        assert_eq!(filter.conditions[0].field, "bootcamp");
        assert_eq!(filter.conditions[0].values, vec![FilterValue::Uuid(bootcamp_id)]);
        assert_eq!(filter.conditions[1].field, "weeks");
    }
}
