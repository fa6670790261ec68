use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::advanced_results::{AdvancedResultsQuery, AdvancedResultsResponse};
use crate::application::app_error::AppResult;
use crate::application::dto::advanced_results::{GetAdvancedResultsDTO, ScopeDTO};
use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
use crate::domain::entities::review::{REVIEW_BOOTCAMP, REVIEW_USER, REVIEWS};

fn reviews_dto(params: Vec<(String, String)>, scope: Option<ScopeDTO>) -> GetAdvancedResultsDTO {
    GetAdvancedResultsDTO {
        schema: &REVIEWS,
        params,
        scope,
        populate: vec![&REVIEW_BOOTCAMP, &REVIEW_USER],
    }
}

#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    params(AdvancedResultsQuery),
    responses(
        (
            status = 200,
            description = "Reviews with `bootcamp` and `user` expanded",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Page out of range or a filter value of the wrong type",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_reviews(
    interactor: GetAdvancedResultsInteractor,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(reviews_dto(params, None)).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/bootcamps/{bootcamp_id}/reviews",
    tag = "Reviews",
    params(
        ("bootcamp_id" = String, Path, description = "Bootcamp UUID"),
        AdvancedResultsQuery
    ),
    responses(
        (
            status = 200,
            description = "Reviews of one bootcamp",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Malformed bootcamp id, page out of range or invalid filter value",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_bootcamp_reviews(
    interactor: GetAdvancedResultsInteractor,
    Path(bootcamp_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let scope = ScopeDTO {
        field: "bootcamp",
        value: bootcamp_id,
    };
    let result = interactor.execute(reviews_dto(params, Some(scope))).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/reviews",
    tag = "Reviews",
    params(
        ("user_id" = String, Path, description = "User UUID"),
        AdvancedResultsQuery
    ),
    responses(
        (
            status = 200,
            description = "Reviews written by one user",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Malformed user id, page out of range or invalid filter value",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_user_reviews(
    interactor: GetAdvancedResultsInteractor,
    Path(user_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let scope = ScopeDTO {
        field: "user",
        value: user_id,
    };
    let result = interactor.execute(reviews_dto(params, Some(scope))).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}
