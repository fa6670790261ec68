use async_trait::async_trait;
use futures::FutureExt;
use serde_json::Value;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::collection::CollectionReader;
use crate::domain::entities::schema::{CollectionSchema, FieldKind, Record};
use crate::domain::query::AdvancedQuery;
use crate::domain::query::filter::{Condition, Filter, FilterOperator, FilterValue};
use crate::domain::query::projection::Projection;
use crate::domain::query::sort::{Sort, SortDirection};

#[derive(Clone)]
pub struct CollectionGateway {
    session: SqlxSession,
}

// Identifiers only ever come from the static collection schemas, never from the request.
fn quoted(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

impl CollectionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_record(value: Value) -> AppResult<Record> {
        match value {
            Value::Object(record) => Ok(record),
            other => Err(AppError::InvalidRecord(format!("expected a json object, got {}", other))),
        }
    }

    fn push_select(builder: &mut QueryBuilder<'static, Postgres>, schema: &CollectionSchema, projection: &Projection) {
        builder.push("SELECT json_build_object(");
        for (i, field) in projection.fields.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(format!("'{}', {}", field, quoted(field)));
        }
        builder.push(") AS record FROM ");
        builder.push(quoted(schema.name));
    }

    fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &FilterValue) {
        match value {
            FilterValue::Text(v) => builder.push_bind(v.clone()),
            FilterValue::Integer(v) => builder.push_bind(*v),
            FilterValue::Float(v) => builder.push_bind(*v),
            FilterValue::Boolean(v) => builder.push_bind(*v),
            FilterValue::Uuid(v) => builder.push_bind(*v),
            FilterValue::Timestamp(v) => builder.push_bind(*v),
        };
    }

    fn push_values(builder: &mut QueryBuilder<'static, Postgres>, values: &[FilterValue]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            Self::push_value(builder, value);
        }
    }

    fn push_condition(builder: &mut QueryBuilder<'static, Postgres>, condition: &Condition) {
        let column = quoted(condition.field);
        let is_array = condition.kind == FieldKind::TextArray;

        if condition.operator == FilterOperator::In {
            if condition.values.is_empty() {
                builder.push("FALSE");
            } else if is_array {
                builder.push(format!("{} && ARRAY[", column));
                Self::push_values(builder, &condition.values);
                builder.push("]::text[]");
            } else {
                builder.push(format!("{} IN (", column));
                Self::push_values(builder, &condition.values);
                builder.push(")");
            }
            return;
        }

        let Some(value) = condition.values.first() else {
            builder.push("FALSE");
            return;
        };

        match (condition.operator, is_array) {
            (FilterOperator::Eq, true) => {
                Self::push_value(builder, value);
                builder.push(format!(" = ANY({})", column));
            }
            (FilterOperator::Ne, true) => {
                builder.push("NOT (");
                Self::push_value(builder, value);
                builder.push(format!(" = ANY(COALESCE({}, '{{}}')))", column));
            }
            (operator, _) => {
                let sql_operator = match operator {
                    FilterOperator::Ne => "IS DISTINCT FROM",
                    FilterOperator::Gt => ">",
                    FilterOperator::Gte => ">=",
                    FilterOperator::Lt => "<",
                    FilterOperator::Lte => "<=",
                    FilterOperator::Eq | FilterOperator::In => "=",
                };
                builder.push(format!("{} {} ", column, sql_operator));
                Self::push_value(builder, value);
            }
        }
    }

    fn push_where(builder: &mut QueryBuilder<'static, Postgres>, filter: &Filter) {
        if filter.is_empty() {
            return;
        }
        for (i, condition) in filter.conditions.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            Self::push_condition(builder, condition);
        }
    }

    // Nulls sort as the lowest value in both directions; `id` breaks ties so pages never overlap.
    fn push_order(builder: &mut QueryBuilder<'static, Postgres>, sort: &Sort) {
        builder.push(" ORDER BY ");
        let mut terms: Vec<String> = sort
            .keys
            .iter()
            .map(|key| {
                let direction = match key.direction {
                    SortDirection::Ascending => "ASC NULLS FIRST",
                    SortDirection::Descending => "DESC NULLS LAST",
                };
                format!("{} {}", quoted(key.field), direction)
            })
            .collect();
        if !sort.keys.iter().any(|k| k.field == CollectionSchema::ID_FIELD) {
            terms.push(format!("{} ASC", quoted(CollectionSchema::ID_FIELD)));
        }
        builder.push(terms.join(", "));
    }

    pub fn count_query(schema: &CollectionSchema, filter: &Filter) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
        builder.push(quoted(schema.name));
        Self::push_where(&mut builder, filter);
        builder
    }

    pub fn find_query(schema: &CollectionSchema, query: &AdvancedQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("");
        Self::push_select(&mut builder, schema, &query.projection);
        Self::push_where(&mut builder, &query.filter);
        Self::push_order(&mut builder, &query.sort);
        if query.page.limit > 0 {
            builder.push(" LIMIT ");
            builder.push_bind(query.page.limit);
        }
        if query.page.skip() > 0 {
            builder.push(" OFFSET ");
            builder.push_bind(query.page.skip());
        }
        builder
    }

    pub fn find_by_ids_query(
        schema: &CollectionSchema,
        ids: &[Uuid],
        projection: &Projection,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("");
        Self::push_select(&mut builder, schema, projection);
        builder.push(format!(" WHERE {} = ANY(", quoted(CollectionSchema::ID_FIELD)));
        builder.push_bind(ids.to_vec());
        builder.push(")");
        builder
    }
}

#[async_trait]
impl CollectionReader for CollectionGateway {
    async fn count(&self, schema: &'static CollectionSchema, filter: &Filter) -> AppResult<i64> {
        let mut builder = Self::count_query(schema, filter);
        self.session
            .with_tx(|tx| {
                async move {
                    let count = builder.build_query_scalar::<i64>().fetch_one(tx.as_mut()).await?;
                    Ok(count)
                }
                .boxed()
            })
            .await
    }

    async fn find(&self, schema: &'static CollectionSchema, query: &AdvancedQuery) -> AppResult<Vec<Record>> {
        let mut builder = Self::find_query(schema, query);
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = builder.build_query_scalar::<Value>().fetch_all(tx.as_mut()).await?;
                    rows.into_iter().map(Self::get_record).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_ids(
        &self,
        schema: &'static CollectionSchema,
        ids: &[Uuid],
        projection: &Projection,
    ) -> AppResult<Vec<Record>> {
        let mut builder = Self::find_by_ids_query(schema, ids, projection);
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = builder.build_query_scalar::<Value>().fetch_all(tx.as_mut()).await?;
                    rows.into_iter().map(Self::get_record).collect()
                }
                .boxed()
            })
            .await
    }
}
