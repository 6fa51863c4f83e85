use serde::Deserialize;
use time::Date;

/// Request body for user registration. Field names follow the client's
/// camelCase wire format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// Storage key of an already-uploaded avatar image.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<Date>,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{
                "email": "tester.001@company.com",
                "password": "Tester@001",
                "fullName": "Tester 001",
                "avatar": "s3_img_string",
                "dateOfBirth": "1990-05-04"
            }"#,
        )
        .unwrap();

        assert_eq!(req.email, "tester.001@company.com");
        assert_eq!(req.full_name, "Tester 001");
        assert_eq!(req.avatar.as_deref(), Some("s3_img_string"));
        assert_eq!(req.date_of_birth, Some(date!(1990 - 05 - 04)));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email": "tester.001@company.com", "password": "Tester@001", "fullName": "Tester 001"}"#,
        )
        .unwrap();

        assert!(req.avatar.is_none());
        assert!(req.date_of_birth.is_none());
    }
}
