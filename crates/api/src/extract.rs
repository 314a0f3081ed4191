//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every client error is a JSON 400.

use axum::extract::{FromRequest, FromRequestParts, Request};
use gazette_core::error::CoreError;
use gazette_core::validation::field_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor. Malformed or mistyped bodies become 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor. Unparseable parameters become 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path extractor. Non-numeric ids and the like become 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// JSON body that is deserialized and then checked with `validator`.
///
/// Field failures are reported as [`CoreError::InvalidFields`].
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateNews>) -> AppResult<Json<()>> {
///     // input.validate() has already passed here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::InvalidFields(field_errors(&errors))))?;
        Ok(ValidatedJson(value))
    }
}
