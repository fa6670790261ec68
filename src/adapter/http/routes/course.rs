use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::advanced_results::{AdvancedResultsQuery, AdvancedResultsResponse};
use crate::application::app_error::AppResult;
use crate::application::dto::advanced_results::{GetAdvancedResultsDTO, ScopeDTO};
use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
use crate::domain::entities::course::{COURSE_BOOTCAMP, COURSES};

fn courses_dto(params: Vec<(String, String)>, scope: Option<ScopeDTO>) -> GetAdvancedResultsDTO {
    GetAdvancedResultsDTO {
        schema: &COURSES,
        params,
        scope,
        populate: vec![&COURSE_BOOTCAMP],
    }
}

#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    params(AdvancedResultsQuery),
    responses(
        (
            status = 200,
            description = "Courses with `bootcamp` expanded to its name and description",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Page out of range or a filter value of the wrong type",
            body = ErrorResponse,
            example = json!(
                {
                    "success": false,
                    "error": "Invalid value `many` for filter `weeks[gte]`"
                }
            )
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_courses(
    interactor: GetAdvancedResultsInteractor,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(courses_dto(params, None)).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/bootcamps/{bootcamp_id}/courses",
    tag = "Courses",
    params(
        ("bootcamp_id" = String, Path, description = "Bootcamp UUID"),
        AdvancedResultsQuery
    ),
    responses(
        (
            status = 200,
            description = "Courses of one bootcamp",
            body = AdvancedResultsResponse
        ),
        (
            status = 400,
            description = "Malformed bootcamp id, page out of range or invalid filter value",
            body = ErrorResponse,
            example = json!(
                {
                    "success": false,
                    "error": "Bad Request"
                }
            )
        ),
        (
            status = 500,
            description = "Malformed JSON sort or internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_bootcamp_courses(
    interactor: GetAdvancedResultsInteractor,
    Path(bootcamp_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let scope = ScopeDTO {
        field: "bootcamp",
        value: bootcamp_id,
    };
    let result = interactor.execute(courses_dto(params, Some(scope))).await?;

    Ok((StatusCode::OK, Json(AdvancedResultsResponse::from(result))))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::get;
    use rstest::rstest;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::adapter::http::routes::course::{get_bootcamp_courses, get_courses};
    use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
    use crate::domain::query::filter::FilterValue;
    use crate::tests::fixtures::{bootcamp_record, course_record};
    use crate::tests::helpers::{make_interactor, send_get};
    use crate::tests::mocks::MockCollectionReaderMock;

    fn app(interactor: GetAdvancedResultsInteractor) -> Router {
        let scoped = interactor.clone();
        Router::new()
            .route(
                "/courses",
                get(move |query: Query<Vec<(String, String)>>| get_courses(interactor.clone(), query)),
            )
            .route(
                "/bootcamps/{bootcamp_id}/courses",
                get(move |path: Path<String>, query: Query<Vec<(String, String)>>| {
                    get_bootcamp_courses(scoped.clone(), path, query)
                }),
            )
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_courses_populates_bootcamp() {
        let bootcamp_id = Uuid::now_v7();
        let mut reader = MockCollectionReaderMock::new();
        reader.expect_count().returning(|_, _| Ok(1));
        reader
            .expect_find()
            .returning(move |_, _| Ok(vec![course_record(0, Some(bootcamp_id))]));
        reader.expect_find_by_ids().returning(move |_, _, projection| {
            let mut bootcamp = bootcamp_record(7);
            bootcamp.retain(|k, _| projection.contains(k));
            bootcamp.insert("id".to_string(), json!(bootcamp_id.to_string()));
            Ok(vec![bootcamp])
        });

        let (status, body) = send_get(app(make_interactor(reader)), "/courses").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"][0]["bootcamp"],
            json!({
                "id": bootcamp_id.to_string(),
                "name": "Bootcamp 7",
                "description": "Full stack web development"
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamp_courses_scopes_by_bootcamp() {
        let bootcamp_id = Uuid::now_v7();
        let mut reader = MockCollectionReaderMock::new();
        reader
            .expect_count()
            .withf(move |_, filter| {
                filter.conditions.first().is_some_and(|c| {
                    c.field == "bootcamp" && c.values == vec![FilterValue::Uuid(bootcamp_id)]
                })
            })
            .returning(|_, _| Ok(0));
        reader.expect_find().returning(|_, _| Ok(vec![]));

        let uri = format!("/bootcamps/{}/courses?select=title", bootcamp_id);
        let (status, body) = send_get(app(make_interactor(reader)), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["data"], Value::Array(vec![]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_bootcamp_courses_malformed_id() {
        let mut reader = MockCollectionReaderMock::new();
        reader.expect_count().never();

        let (status, body) = send_get(app(make_interactor(reader)), "/bootcamps/not-a-uuid/courses").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "Bad Request" }));
    }
}
