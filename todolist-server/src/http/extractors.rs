//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::models::ValidationError;
use super::error::ApiError;

/// Extract and validate a list id from path
pub struct ValidListId(pub i64);

impl<S> FromRequestParts<S> for ValidListId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_list_id())?;

        let id = id.parse::<i64>().map_err(|_| invalid_list_id())?;

        Ok(Self(id))
    }
}

fn invalid_list_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "list id",
        reason: "must be an integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<ValidListId, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidListId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn missing_path_params_report_invalid_format() {
        // No route matched, so there are no path params to extract
        let err = extract("/lists/1/").await.err().unwrap();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidFormat { field: "list id", .. })
        ));
    }
}
