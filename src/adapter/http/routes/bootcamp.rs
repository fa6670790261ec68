use axum::Json;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::advanced_results::{AdvancedResultsQuery, AdvancedResultsResponse};
use crate::application::app_error::AppResult;
use crate::application::dto::advanced_results::GetAdvancedResultsDTO;
use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
use crate::domain::entities::bootcamp::BOOTCAMPS;

#[utoipa::path(
    get,
    path = "/bootcamps",
    tag = "Bootcamps",
    params(AdvancedResultsQuery),
    responses(
        (
            status = 200,
            description = "Filtered, projected, sorted and paginated bootcamps",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Page out of range or a filter value of the wrong type",
            body = ErrorResponse,
            example = json!(
                {
                    "success": false,
                    "error": "Pagination page validation error"
                }
            )
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "success": false,
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn get_bootcamps(
    interactor: GetAdvancedResultsInteractor,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let dto = GetAdvancedResultsDTO {
        schema: &BOOTCAMPS,
        params,
        scope: None,
        populate: vec![],
    };
    let result = interactor.execute(dto).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use rstest::rstest;
    use serde_json::json;

    use crate::adapter::http::routes::bootcamp::get_bootcamps;
    use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
    use crate::tests::fixtures::{bootcamp_record, page_of};
    use crate::tests::helpers::{make_interactor, send_get};
    use crate::tests::mocks::MockCollectionReaderMock;

    fn app(interactor: GetAdvancedResultsInteractor) -> Router {
        Router::new().route(
            "/bootcamps",
            get(move |query: Query<Vec<(String, String)>>| get_bootcamps(interactor.clone(), query)),
        )
    }

    fn collection_of(count: i64) -> MockCollectionReaderMock {
        let mut reader = MockCollectionReaderMock::new();
        reader.expect_count().returning(move |_, _| Ok(count));
        reader
            .expect_find()
            .returning(move |_, query| Ok(page_of(count, query.page, bootcamp_record)));
        reader
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamps_envelope() {
        let (status, body) = send_get(app(make_interactor(collection_of(25))), "/bootcamps?page=2&limit=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["count"], json!(25));
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(
            body["pagination"],
            json!({ "previous": { "page": 1, "limit": 10 }, "next": { "page": 3, "limit": 10 } })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamps_without_params_returns_single_page() {
        let (status, body) = send_get(app(make_interactor(collection_of(3))), "/bootcamps").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["pagination"], json!({}));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamps_page_out_of_range() {
        let (status, body) = send_get(app(make_interactor(collection_of(5))), "/bootcamps?page=2&limit=10").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "Pagination page validation error" }));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamps_malformed_json_sort() {
        let mut reader = MockCollectionReaderMock::new();
        reader.expect_count().never();

        let (status, body) = send_get(app(make_interactor(reader)), "/bootcamps?sort=%7B%22name%22").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("EOF"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamps_invalid_filter_value() {
        let mut reader = MockCollectionReaderMock::new();
        reader.expect_count().never();

        let (status, body) = send_get(app(make_interactor(reader)), "/bootcamps?housing=maybe").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Invalid value `maybe` for filter `housing`"));
    }
}
