//! Extractor configuration that reports undecodable requests in the shared
//! error format instead of actix's plain-text defaults.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::DomainError;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let reason = match &err {
        JsonPayloadError::ContentType => "content type must be application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large"
        }
        _ => "request body is not valid JSON for this resource",
    };
    DomainError::invalid_request(reason)
        .with_details(json!({ "cause": err.to_string() }))
        .into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected path parameters");
    DomainError::invalid_request("path id must be an integer")
        .with_details(json!({ "path": req.path() }))
        .into()
}

/// JSON body configuration used by every resource scope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path parameter configuration used by every resource scope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, post, test};
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Body {
        #[expect(dead_code, reason = "only decoding is exercised")]
        name: String,
    }

    #[post("/items/{id}")]
    async fn handler(_id: web::Path<i32>, _body: web::Json<Body>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn send(uri: &str, body: &'static str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(path_config())
                .service(handler),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, serde_json::from_slice(&body).expect("json error body"))
    }

    #[rstest]
    #[case::malformed_json("/items/1", "{not json")]
    #[case::wrong_shape("/items/1", r#"{"name": 7}"#)]
    #[case::non_integer_id("/items/abc", r#"{"name": "kettle"}"#)]
    #[actix_web::test]
    async fn undecodable_requests_become_invalid_request(
        #[case] uri: &str,
        #[case] body: &'static str,
    ) {
        let (status, payload) = send(uri, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["code"], "invalid_request");
    }
}
