use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;

use super::traits::BalanceSource;

/// Fetches the balance sheet as CSV from a spreadsheet export URL.
///
/// One unauthenticated GET; any query parameters are baked into the URL.
/// Non-2xx responses are surfaced as source errors so the dashboard can
/// fall back to the empty `Failed` state instead of faulting.
pub struct SheetCsvSource {
    client: Client,
    url: String,
}

impl SheetCsvSource {
    pub fn new(url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BalanceSource for SheetCsvSource {
    fn name(&self) -> &str {
        "SheetCsv"
    }

    async fn fetch_csv(&self) -> Result<String, CoreError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CoreError::Source {
                source_name: self.name().to_string(),
                message: format!("Unexpected status {}", response.status()),
            });
        }

        Ok(response.text().await?)
    }
}
