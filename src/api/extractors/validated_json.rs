//! Validated JSON extractor - combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;
use crate::types::Violation;

/// Validated JSON extractor that automatically validates requests.
///
/// Binding recognizes only the schema's declared fields; unknown keys
/// are ignored. Validation failures reject with the full list of field
/// violations rather than the first one encountered.
///
/// # Example
///
/// ```rust,ignore
/// use agency_api::api::extractors::ValidatedJson;
/// use agency_api::domain::RegisterAgency;
///
/// async fn register(ValidatedJson(payload): ValidatedJson<RegisterAgency>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(vec![Violation::new("body", "json", e.body_text())]))?;

        validate_payload(&value)?;

        Ok(ValidatedJson(value))
    }
}

/// Run schema validation, collecting every field violation.
///
/// Violations are ordered by field then rule so the response is stable
/// regardless of hash-map iteration order.
pub fn validate_payload<T: Validate>(value: &T) -> Result<(), AppError> {
    let Err(errors) = value.validate() else {
        return Ok(());
    };

    let mut violations: Vec<Violation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                Violation::new(field.to_string(), e.code.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| (&a.field, &a.rule).cmp(&(&b.field, &b.rule)));

    Err(AppError::validation(violations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Sample {
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
        password: String,
    }

    #[test]
    fn valid_payload_passes() {
        let sample = Sample {
            email: "agency@example.com".to_string(),
            password: "SecurePass123!".to_string(),
        };
        assert!(validate_payload(&sample).is_ok());
    }

    #[test]
    fn every_violation_is_collected_in_field_order() {
        let sample = Sample {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let err = validate_payload(&sample).unwrap_err();
        let AppError::Validation(violations) = err else {
            panic!("expected validation error");
        };

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[0].message, "Invalid email format");
        assert_eq!(violations[1].field, "password");
        assert_eq!(violations[1].rule, "length");
    }
}
