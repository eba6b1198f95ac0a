use crate::model::{PriceSnapshot, QuoteError};
use crate::quotes::SnapshotProvider;

// Unknown symbols resolve to this snapshot instead of failing.
const DEFAULT_SNAPSHOT: PriceSnapshot = PriceSnapshot {
    price: 1000.0,
    change_percent: 0.0,
};

const QUOTE_TABLE: &[(&str, PriceSnapshot)] = &[
    (
        "RELIANCE",
        PriceSnapshot {
            price: 2456.75,
            change_percent: 1.41,
        },
    ),
    (
        "TCS",
        PriceSnapshot {
            price: 3678.90,
            change_percent: -1.22,
        },
    ),
    (
        "HDFCBANK",
        PriceSnapshot {
            price: 1634.50,
            change_percent: 1.44,
        },
    ),
    (
        "INFY",
        PriceSnapshot {
            price: 1445.25,
            change_percent: -1.28,
        },
    ),
];

/// Snapshot provider backed by a fixed table. Stands in for a live quote
/// feed; swap for a real provider behind the same trait.
pub struct StaticQuotes;

impl StaticQuotes {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SnapshotProvider for StaticQuotes {
    async fn snapshot(&self, symbol: &str) -> Result<PriceSnapshot, QuoteError> {
        let snapshot = QUOTE_TABLE
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, snapshot)| *snapshot)
            .unwrap_or(DEFAULT_SNAPSHOT);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_symbol_returns_table_entry() {
        let quotes = StaticQuotes::new();
        let snapshot = quotes.snapshot("RELIANCE").await.unwrap();
        assert_eq!(snapshot.price, 2456.75);
        assert_eq!(snapshot.change_percent, 1.41);
    }

    #[tokio::test]
    async fn unknown_symbol_defaults_instead_of_failing() {
        let quotes = StaticQuotes::new();
        let snapshot = quotes.snapshot("UNLISTED").await.unwrap();
        assert_eq!(snapshot.price, 1000.0);
        assert_eq!(snapshot.change_percent, 0.0);
    }
}
