//! Tests for the API client functionality
//!
//! Validates URL construction, envelope unwrapping and the mapping of backend
//! failures onto `ApiError`.

#[cfg(test)]
mod tests {
    use crate::api::{
        ApiError, AuthApi, BoardClient, decode_envelope, status_error, unwrap_envelope,
    };
    use reqwest::StatusCode;
    use shared::models::{ApiResponse, User};

    fn user() -> User {
        User {
            email: "a@b.com".to_string(),
            token: "t-1".to_string(),
        }
    }

    fn rejected<T>(code: &str, message: &str) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_api_url_joins_without_double_slashes() {
        let client = BoardClient::new("http://localhost:8080/api/");

        assert_eq!(
            client.api_url("auth/login"),
            "http://localhost:8080/api/auth/login"
        );
        assert_eq!(
            client.api_url("/posts/5"),
            "http://localhost:8080/api/posts/5"
        );
    }

    #[test]
    fn test_authorize_installs_and_drops_token() {
        let client = BoardClient::new("http://localhost:8080/api");
        assert_eq!(client.current_token(), None);

        client.authorize(Some("t-1"));
        assert_eq!(client.current_token().as_deref(), Some("t-1"));

        client.authorize(None);
        assert_eq!(client.current_token(), None);
    }

    #[test]
    fn test_clones_share_the_token() {
        let client = BoardClient::new("http://localhost:8080/api");
        let clone = client.clone();

        client.authorize(Some("t-2"));
        assert_eq!(clone.current_token().as_deref(), Some("t-2"));
    }

    #[test]
    fn test_unwrap_successful_envelope() {
        let envelope = ApiResponse {
            success: true,
            code: "SUCCESS".to_string(),
            message: "logged in".to_string(),
            data: Some(user()),
        };

        let data = unwrap_envelope(envelope).unwrap();
        assert_eq!(data, Some(user()));
    }

    #[test]
    fn test_unwrap_rejected_envelope() {
        let envelope: ApiResponse<User> = rejected("USER_NOT_FOUND", "no such user");

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(matches!(
            &err,
            ApiError::Rejected { code, message }
                if code == "USER_NOT_FOUND" && message == "no such user"
        ));
        assert!(!err.is_unauthorized());
        assert_eq!(err.user_message(), "no such user");
    }

    #[test]
    fn test_status_error_prefers_backend_message() {
        let body: ApiResponse<serde_json::Value> = rejected("INVALID_PASSWORD", "wrong password");

        let err = status_error(StatusCode::BAD_REQUEST, Some(body));
        assert!(matches!(
            &err,
            ApiError::Status { status: 400, message } if message == "wrong password"
        ));
    }

    #[test]
    fn test_status_error_falls_back_to_reason_phrase() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(matches!(
            &err,
            ApiError::Status { status: 500, message } if message == "Internal Server Error"
        ));

        let blank: ApiResponse<serde_json::Value> = rejected("ERR", "   ");
        let err = status_error(StatusCode::NOT_FOUND, Some(blank));
        assert!(matches!(
            &err,
            ApiError::Status { status: 404, message } if message == "Not Found"
        ));
    }

    #[test]
    fn test_unauthorized_statuses() {
        let unauthorized = status_error(StatusCode::UNAUTHORIZED, None);
        let forbidden = status_error(StatusCode::FORBIDDEN, None);
        let server = status_error(StatusCode::BAD_GATEWAY, None);

        assert!(unauthorized.is_unauthorized());
        assert!(forbidden.is_unauthorized());
        assert!(!server.is_unauthorized());
        assert_eq!(unauthorized.user_message(), "Invalid credentials");
        assert_eq!(server.user_message(), "Bad Gateway");
    }

    #[test]
    fn test_decode_login_envelope() {
        let body = br#"{"success":true,"code":"SUCCESS","message":"ok","data":{"email":"a@b.com","token":"t-1"}}"#;

        let envelope = decode_envelope::<User>(body).unwrap();
        assert_eq!(unwrap_envelope(envelope).unwrap(), Some(user()));
    }

    #[test]
    fn test_decode_envelope_without_data() {
        let body = br#"{"success":true,"code":"SUCCESS","message":"deleted"}"#;

        let envelope = decode_envelope::<User>(body).unwrap();
        assert_eq!(unwrap_envelope(envelope).unwrap(), None);
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_envelope::<User>(b"<html>gateway</html>").unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_unauthorized());
        assert!(err.user_message().starts_with("malformed response"));
    }

    #[test]
    fn test_missing_data_message() {
        let err = ApiError::MissingData;
        assert_eq!(err.user_message(), "response did not include data");
    }
}
