//! Bundled provider dataset and the mock fetch layer
//!
//! There is no backend: the full dataset ships with the app as a JSON
//! document and "fetching" resolves it after a fixed simulated delay, the
//! same way the original mock API behaved.

use std::sync::OnceLock;

use crate::types::Provider;

const RAW_DATASET: &str = include_str!("providers.json");

/// Simulated network latency for every fetch, in milliseconds.
const FETCH_DELAY_MS: u32 = 800;

static DATASET: OnceLock<Result<Vec<Provider>, String>> = OnceLock::new();

/// Errors surfaced by the mock fetch layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("provider not found: {0}")]
    NotFound(String),

    #[error("failed to load provider data: {0}")]
    Dataset(String),
}

fn dataset() -> Result<&'static [Provider], FetchError> {
    let parsed = DATASET.get_or_init(|| {
        serde_json::from_str::<Vec<Provider>>(RAW_DATASET).map_err(|e| e.to_string())
    });

    match parsed {
        Ok(providers) => Ok(providers),
        Err(msg) => {
            tracing::error!(error = %msg, "bundled provider dataset is malformed");
            Err(FetchError::Dataset(msg.clone()))
        }
    }
}

/// Fetch every provider record, after the simulated delay.
pub async fn fetch_all_providers() -> Result<Vec<Provider>, FetchError> {
    sleep_ms(FETCH_DELAY_MS).await;

    let providers = dataset()?;
    tracing::debug!(count = providers.len(), "fetched provider list");
    Ok(providers.to_vec())
}

/// Fetch a single provider by id, after the simulated delay.
///
/// Unknown ids resolve to [`FetchError::NotFound`].
pub async fn fetch_provider_by_id(id: &str) -> Result<Provider, FetchError> {
    sleep_ms(FETCH_DELAY_MS).await;

    dataset()?
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(%id, "provider lookup missed");
            FetchError::NotFound(id.to_string())
        })
}

/// Sleep helper shared by the fetch layer and the contact form's simulated
/// submission. Browser timers on wasm, tokio everywhere else.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_dataset_parses() {
        let providers = dataset().expect("dataset should parse");
        assert!(!providers.is_empty());
    }

    #[test]
    fn bundled_dataset_has_unique_ids() {
        let providers = dataset().unwrap();
        let ids: HashSet<_> = providers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), providers.len());
    }

    #[test]
    fn ratings_are_in_range() {
        for provider in dataset().unwrap() {
            assert!(
                (0.0..=5.0).contains(&provider.rating),
                "{} has rating {}",
                provider.id,
                provider.rating
            );
        }
    }

    #[tokio::test]
    async fn fetch_all_returns_the_full_dataset() {
        let fetched = fetch_all_providers().await.unwrap();
        assert_eq!(fetched.len(), dataset().unwrap().len());
    }

    #[tokio::test]
    async fn fetch_by_known_id_returns_exactly_that_record() {
        let first = &dataset().unwrap()[0];
        let fetched = fetch_provider_by_id(&first.id).await.unwrap();
        assert_eq!(&fetched, first);
    }

    #[tokio::test]
    async fn fetch_by_unknown_id_is_not_found() {
        let err = fetch_provider_by_id("no-such-provider").await.unwrap_err();
        assert_eq!(err, FetchError::NotFound("no-such-provider".into()));
    }
}
