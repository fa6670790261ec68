use async_trait::async_trait;
use uuid::Uuid;

use crate::application::app_error::AppResult;
use crate::domain::entities::schema::{CollectionSchema, Record};
use crate::domain::query::AdvancedQuery;
use crate::domain::query::filter::Filter;
use crate::domain::query::projection::Projection;

#[async_trait]
pub trait CollectionReader: Send + Sync {
    async fn count(&self, schema: &'static CollectionSchema, filter: &Filter) -> AppResult<i64>;
    async fn find(&self, schema: &'static CollectionSchema, query: &AdvancedQuery) -> AppResult<Vec<Record>>;
    async fn find_by_ids(
        &self,
        schema: &'static CollectionSchema,
        ids: &[Uuid],
        projection: &Projection,
    ) -> AppResult<Vec<Record>>;
}
