//! Glue between `validator` derive output and API error payloads.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::url_policy::is_allowed_url;

/// One failed field, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flatten `validator` errors into a stable, field-sorted list.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldError {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code)),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

/// Image URLs must be absolute http(s) or site-relative.
pub fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if is_allowed_url(url) {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url");
        err.message = Some("imageUrl must be an http(s) URL or a site-relative path".into());
        Err(err)
    }
}

/// Reject strings that are only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
