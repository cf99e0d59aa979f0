//! Request value extraction and JSON response writing

use axum::{
    body::Body,
    extract::Query,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Kind of response being written, recorded in the response log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Credentials,
}

impl RequestKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
        }
    }
}

/// Look up a query parameter by name
///
/// When the parameter repeats, the first occurrence wins. Returns `None` when
/// the parameter is absent or the query string cannot be parsed.
pub fn value_from_request(uri: &Uri, name: &str) -> Option<String> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    params
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

/// Write `body` as a JSON response with the given status
pub fn write_json_response(status: StatusCode, body: Vec<u8>, kind: RequestKind) -> Response {
    debug!(
        request_kind = kind.as_str(),
        status = status.as_u16(),
        bytes = body.len(),
        "writing json response"
    );

    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Response used when no payload could be produced at all
///
/// Carries no body and no content type, so a client cannot mistake it for a
/// well-formed error document.
pub fn empty_failure_response() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_request() {
        let uri: Uri = "/v1/credentials?id=task789&other=1".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id").as_deref(), Some("task789"));
        assert_eq!(value_from_request(&uri, "missing"), None);
    }

    #[test]
    fn test_value_from_request_first_value_wins() {
        let uri: Uri = "/v1/credentials?id=task789&id=task123".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id").as_deref(), Some("task789"));

        let uri: Uri = "/v1/credentials?id=&id=task789".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id").as_deref(), Some(""));
    }

    #[test]
    fn test_value_from_request_without_query() {
        let uri: Uri = "/v1/credentials".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id"), None);
    }

    #[test]
    fn test_value_from_request_empty_value() {
        let uri: Uri = "/v1/credentials?id=".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id").as_deref(), Some(""));
    }

    #[test]
    fn test_value_from_request_decodes() {
        let uri: Uri = "/v1/credentials?id=a%2Fb".parse().unwrap();
        assert_eq!(value_from_request(&uri, "id").as_deref(), Some("a/b"));
    }

    #[test]
    fn test_write_json_response_sets_content_type() {
        let response = write_json_response(StatusCode::OK, b"{}".to_vec(), RequestKind::Credentials);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_empty_failure_response() {
        let response = empty_failure_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
