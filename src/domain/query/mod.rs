pub mod filter;
pub mod page;
pub mod projection;
pub mod sort;

use crate::application::app_error::AppResult;
use crate::domain::entities::schema::CollectionSchema;
use crate::domain::query::filter::Filter;
use crate::domain::query::page::PageRequest;
use crate::domain::query::projection::Projection;
use crate::domain::query::sort::Sort;

pub const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

/// A collection request resolved against its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedQuery {
    pub filter: Filter,
    pub projection: Projection,
    pub sort: Sort,
    pub page: PageRequest,
}

impl AdvancedQuery {
    pub fn parse(schema: &CollectionSchema, params: &[(String, String)], default_sort: &str) -> AppResult<Self> {
        Ok(Self {
            filter: Filter::from_params(schema, params)?,
            projection: Projection::parse(schema, last_value(params, "select")),
            sort: Sort::parse(schema, last_value(params, "sort"), default_sort)?,
            page: PageRequest::parse(last_value(params, "page"), last_value(params, "limit"))?,
        })
    }
}

// Repeated control keys resolve to their last occurrence.
fn last_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
