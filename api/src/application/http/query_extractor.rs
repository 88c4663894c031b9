use std::collections::BTreeSet;

use axum::{extract::FromRequestParts, http::request::Parts};
use safemenu_core::domain::allergen::{entities::Allergen, value_objects::parse_allergen_list};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Excluded allergens from the query string. Accepts a comma-separated list
/// (`?exclude=MILK,NUTS`), repeated keys (`?exclude=MILK&exclude=NUTS`) or a
/// mix; a missing parameter means no exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergenExclusion(pub BTreeSet<Allergen>);

impl<S> FromRequestParts<S> for AllergenExclusion
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("invalid query string: {e}")))?;

        let mut excluded = BTreeSet::new();
        for (_, value) in pairs.iter().filter(|(key, _)| key == "exclude") {
            excluded.extend(parse_allergen_list(value).map_err(ApiError::from)?);
        }

        Ok(AllergenExclusion(excluded))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};

    use super::*;

    async fn extract(uri: &str) -> Result<AllergenExclusion, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        AllergenExclusion::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn comma_list_and_repeated_keys_merge() {
        let AllergenExclusion(excluded) = extract("/safe?exclude=MILK,NUTS&exclude=EGGS&page=2")
            .await
            .unwrap();

        assert_eq!(
            excluded,
            BTreeSet::from([Allergen::Milk, Allergen::Nuts, Allergen::Eggs])
        );
    }

    #[tokio::test]
    async fn order_of_codes_does_not_matter() {
        let a = extract("/safe?exclude=MILK,NUTS").await.unwrap();
        let b = extract("/safe?exclude=NUTS,MILK").await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn missing_parameter_excludes_nothing() {
        let AllergenExclusion(excluded) = extract("/safe").await.unwrap();

        assert!(excluded.is_empty());
    }

    #[tokio::test]
    async fn unknown_code_is_a_bad_request() {
        let err = extract("/safe?exclude=MILK,KIWI").await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
