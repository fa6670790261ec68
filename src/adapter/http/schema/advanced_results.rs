use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use crate::application::dto::advanced_results::AdvancedResultsDTO;
use crate::domain::entities::schema::Record;
use crate::domain::query::page::{PageLink, Pagination};

/// Control keys understood by every listing. Any other key naming a field of the
/// collection filters by equality, and `field[gt|gte|lt|lte|ne|in]` applies an operator.
#[derive(Debug, IntoParams)]
#[allow(dead_code)]
#[into_params(parameter_in = Query)]
pub struct AdvancedResultsQuery {
    /// Comma-separated projection, e.g. `name,description`. `id` is always returned.
    #[param(example = "name,average_cost")]
    pub select: Option<String>,
    /// `name,-average_cost` or a JSON object such as `{"average_cost":-1}`.
    #[param(example = "-average_cost")]
    pub sort: Option<String>,
    #[param(minimum = 1, default = 1)]
    pub page: Option<i64>,
    /// `0` returns every match on a single page.
    #[param(minimum = 0, default = 0)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageLinkResponse {
    #[schema(example = 2)]
    pub page: i64,
    #[schema(example = 10)]
    pub limit: i64,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct PaginationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLinkResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLinkResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "success": true,
    "data": [
        {
            "id": "019c47ec-183d-744e-b11d-cd409015bf13",
            "name": "Devworks Bootcamp",
            "average_cost": 10000.0
        }
    ],
    "count": 25,
    "pagination": {
        "previous": { "page": 1, "limit": 10 },
        "next": { "page": 3, "limit": 10 }
    }
}))]
pub struct AdvancedResultsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Record>,
    #[schema(example = 25)]
    pub count: i64,
    pub pagination: PaginationResponse,
}

impl From<PageLink> for PageLinkResponse {
    fn from(link: PageLink) -> Self {
        Self {
            page: link.page,
            limit: link.limit,
        }
    }
}

impl From<Pagination> for PaginationResponse {
    fn from(pagination: Pagination) -> Self {
        Self {
            previous: pagination.previous.map(Into::into),
            next: pagination.next.map(Into::into),
        }
    }
}

impl From<AdvancedResultsDTO> for AdvancedResultsResponse {
    fn from(result: AdvancedResultsDTO) -> Self {
        Self {
            success: true,
            data: result.data,
            count: result.count,
            pagination: result.pagination.into(),
        }
    }
}
