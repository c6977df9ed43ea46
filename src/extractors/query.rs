//! Search query string. Repeated keys keep their first value; rejections map to 400.

use crate::error::AppError;
use crate::handlers::SearchParams;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

#[derive(Debug, Default)]
pub struct SearchQuery(pub SearchParams);

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
            })?;
        Ok(SearchQuery(first_values(pairs)))
    }
}

fn first_values(pairs: Vec<(String, String)>) -> SearchParams {
    let mut params = SearchParams::default();
    for (key, value) in pairs {
        match key.as_str() {
            "q" if params.q.is_none() => params.q = Some(value),
            "limit" if params.limit.is_none() => params.limit = Some(value),
            _ => {}
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let params = first_values(pairs(&[("q", "cha"), ("limit", "3"), ("q", "x"), ("limit", "9")]));
        assert_eq!(params.q.as_deref(), Some("cha"));
        assert_eq!(params.limit(), 3);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = first_values(pairs(&[("page", "2")]));
        assert!(params.q.is_none());
        assert_eq!(params.limit(), 10);
    }
}
