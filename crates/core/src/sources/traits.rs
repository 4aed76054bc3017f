use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for anything that can supply the raw CSV payload.
///
/// The live implementation is an HTTP sheet export; tests swap in an
/// in-memory source. If the export URL scheme changes, only the one
/// implementation changes — the pipeline is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BalanceSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the raw CSV text. The core consumes only the response body.
    async fn fetch_csv(&self) -> Result<String, CoreError>;
}
