use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::{JsonPayloadError, PathError},
};
use serde_json::json;

/// Malformed bodies and path segments answer with the same
/// `{"success": false, "error": ...}` shape as failed writes.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "success": false, "error": self.message }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match &err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        JsonError {
            message: format!("JSON payload error: {}", err),
            status,
        }
    }
}

impl From<PathError> for JsonError {
    fn from(err: PathError) -> Self {
        JsonError {
            message: format!("Invalid path: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_is_a_bad_request() {
        let err = serde_json::from_str::<crate::entities::about::AboutRequest>(
            r#"{"bio": "hi", "colour": "red"}"#
        ).unwrap_err();

        let json_error = JsonError::from(JsonPayloadError::Deserialize(err));

        assert_eq!(json_error.status_code(), StatusCode::BAD_REQUEST);
        assert!(json_error.to_string().contains("unknown field"));
    }

    #[test]
    fn wrong_content_type_is_unsupported() {
        assert_eq!(
            JsonError::from(JsonPayloadError::ContentType).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
