use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::collection::CollectionGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// GetAdvancedResultsInteractor
#[async_trait]
impl FromAppState for GetAdvancedResultsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_read_only(state.pool.clone());
        let collection_gateway = CollectionGateway::new(session.clone());

        Ok(GetAdvancedResultsInteractor::new(
            Arc::new(session),
            Arc::new(collection_gateway),
            state.config.results.default_sort.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for GetAdvancedResultsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetAdvancedResultsInteractor::from_app_state(&app_state).await
    }
}
