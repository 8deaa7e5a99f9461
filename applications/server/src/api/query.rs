/// Query-string extractor that never rejects a request
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Like [`Query`], but malformed input degrades to defaults instead of a 400
///
/// A key given more than once keeps its last value. `T` should hold only
/// string-typed fields; anything it cannot take yields `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery<T>(pub T);

impl<T> LenientQuery<T>
where
    T: DeserializeOwned + Default,
{
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let fields: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        let params = serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unusable query parameters");
            T::default()
        });
        Self(params)
    }
}

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unreadable query string");
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}
