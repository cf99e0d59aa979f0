//! HTTP adapters exposing the credentials endpoint.

pub mod credentials_http;
pub mod response;

pub use credentials_http::{
    emit_response, ApiVersion, CredentialsHttpServer, CREDENTIALS_ID_QUERY_PARAMETER,
    V1_CREDENTIALS_PATH, V2_CREDENTIALS_PATH,
};
pub use response::{value_from_request, write_json_response, RequestKind};
