//! JSON body extractor with schema validation
//!
//! Malformed bodies and constraint violations are rejected with
//! `422 Unprocessable Entity` before the handler runs.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::{Validate, ValidationErrors};

/// Like [`Json`], but also runs the body's [`Validate`] rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[derive(Debug)]
pub enum ValidationRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl From<JsonRejection> for ValidationRejection {
    fn from(rejection: JsonRejection) -> Self {
        ValidationRejection::Json(rejection)
    }
}

impl From<ValidationErrors> for ValidationRejection {
    fn from(errors: ValidationErrors) -> Self {
        ValidationRejection::Invalid(errors)
    }
}

/// One entry of the `detail` list in a rejection body.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ErrorDetail>,
}

impl ValidationRejection {
    pub fn details(&self) -> Vec<ErrorDetail> {
        match self {
            ValidationRejection::Json(rejection) => {
                let kind = match rejection {
                    JsonRejection::JsonDataError(_) => "type_error",
                    JsonRejection::JsonSyntaxError(_) => "json_invalid",
                    JsonRejection::MissingJsonContentType(_) => "missing_content_type",
                    _ => "body_error",
                };
                vec![ErrorDetail {
                    loc: vec!["body".to_string()],
                    msg: rejection.body_text(),
                    kind: kind.to_string(),
                }]
            }
            ValidationRejection::Invalid(errors) => {
                let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
                fields.sort_by(|a, b| a.0.cmp(&b.0));

                fields
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        let field = field.to_string();
                        errs.iter().map(move |err| ErrorDetail {
                            loc: vec!["body".to_string(), field.clone()],
                            msg: err
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field)),
                            kind: err.code.to_string(),
                        })
                    })
                    .collect()
            }
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(rejection = ?self, "Rejected request body");
        let body = ValidationErrorResponse {
            detail: self.details(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InferenceRequest;

    #[test]
    fn test_empty_data_reports_length_violation() {
        let request = InferenceRequest { data: vec![] };
        let errors = request.validate().unwrap_err();
        let details = ValidationRejection::from(errors).details();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].loc, vec!["body", "data"]);
        assert_eq!(details[0].kind, "length");
        assert_eq!(details[0].msg, "data must contain at least 1 item");
    }

    #[test]
    fn test_non_empty_data_is_valid() {
        let request = InferenceRequest { data: vec![1.0] };
        assert!(request.validate().is_ok());
    }
}
