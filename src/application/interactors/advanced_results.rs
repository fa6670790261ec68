use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::advanced_results::{AdvancedResultsDTO, GetAdvancedResultsDTO, ScopeDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::collection::CollectionReader;
use crate::domain::entities::schema::{CollectionSchema, Populate, Record};
use crate::domain::query::AdvancedQuery;
use crate::domain::query::filter::{Filter, FilterValue};
use crate::domain::query::projection::Projection;

#[derive(Clone)]
pub struct GetAdvancedResultsInteractor {
    db_session: Arc<dyn DBSession>,
    collection_reader: Arc<dyn CollectionReader>,
    default_sort: String,
}

impl GetAdvancedResultsInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        collection_reader: Arc<dyn CollectionReader>,
        default_sort: String,
    ) -> Self {
        Self {
            db_session,
            collection_reader,
            default_sort,
        }
    }

    pub async fn execute(&self, dto: GetAdvancedResultsDTO) -> AppResult<AdvancedResultsDTO> {
        let schema = dto.schema;
        let mut query = AdvancedQuery::parse(schema, &dto.params, &self.default_sort)?;
        if let Some(scope) = dto.scope {
            query.filter = Self::scope_filter(schema, scope)?.and(query.filter);
        }
        debug!(collection = schema.name, ?query, "Resolved advanced query");

        let count = self.collection_reader.count(schema, &query.filter).await?;
        query.page.validate(count)?;

        let mut data = self.collection_reader.find(schema, &query).await?;
        for populate in dto.populate {
            if query.projection.contains(populate.path) {
                self.populate(&mut data, populate).await?;
            }
        }
        self.db_session.commit().await?;

        info!(
            collection = schema.name,
            count,
            page = query.page.page,
            limit = query.page.limit,
            returned = data.len(),
            "Advanced results ready"
        );

        Ok(AdvancedResultsDTO {
            data,
            count,
            pagination: query.page.pagination(count),
        })
    }

    fn scope_filter(schema: &CollectionSchema, scope: ScopeDTO) -> AppResult<Filter> {
        let id = Uuid::parse_str(&scope.value)
            .map_err(|e| AppError::InvalidId(format!("Invalid UUID `{}`: {}", scope.value, e)))?;
        Ok(Filter::scoped(schema, scope.field, FilterValue::Uuid(id)))
    }

    /// Replaces each foreign id at `populate.path` with the projected related record,
    /// or `null` when the referenced record no longer exists.
    async fn populate(&self, records: &mut [Record], populate: &Populate) -> AppResult<()> {
        let mut ids: Vec<Uuid> = Vec::new();
        for record in records.iter() {
            if let Some(id) = foreign_id(record, populate.path)? {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        if ids.is_empty() {
            return Ok(());
        }

        let projection = Projection::of(populate.target, populate.select.iter().copied());
        let related = self
            .collection_reader
            .find_by_ids(populate.target, &ids, &projection)
            .await?;

        let mut by_id: HashMap<Uuid, Record> = HashMap::with_capacity(related.len());
        for record in related {
            if let Some(id) = foreign_id(&record, CollectionSchema::ID_FIELD)? {
                by_id.insert(id, record);
            }
        }

        for record in records.iter_mut() {
            if let Some(id) = foreign_id(record, populate.path)? {
                let expanded = by_id.get(&id).cloned().map(Value::Object).unwrap_or(Value::Null);
                record.insert(populate.path.to_string(), expanded);
            }
        }
        Ok(())
    }
}

fn foreign_id(record: &Record, field: &str) -> AppResult<Option<Uuid>> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|e| AppError::InvalidRecord(format!("`{}` is not a UUID: {}", field, e))),
        Some(other) => Err(AppError::InvalidRecord(format!("`{}` holds {} instead of an id", field, other))),
    }
}
