use crate::domain::entities::schema::{CollectionSchema, Populate, Record};
use crate::domain::query::page::Pagination;

/// Restricts a listing to the records referencing one parent, e.g. the courses of a bootcamp.
#[derive(Debug, Clone)]
pub struct ScopeDTO {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct GetAdvancedResultsDTO {
    pub schema: &'static CollectionSchema,
    pub params: Vec<(String, String)>,
    pub scope: Option<ScopeDTO>,
    pub populate: Vec<&'static Populate>,
}

#[derive(Debug, Clone)]
pub struct AdvancedResultsDTO {
    pub data: Vec<Record>,
    pub count: i64,
    pub pagination: Pagination,
}
