use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Normalized envelope returned by every service operation.
///
/// `data` is always present on the wire, as an explicit `null` when the
/// operation carries no payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T: Serialize> {
    pub status_code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl ServiceResponse<()> {
    /// Envelope with no payload.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data: None,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
