use crate::model::{PriceSnapshot, QuoteError};

#[async_trait::async_trait]
pub trait SnapshotProvider: Send + Sync {
    async fn snapshot(&self, symbol: &str) -> Result<PriceSnapshot, QuoteError>;
}
