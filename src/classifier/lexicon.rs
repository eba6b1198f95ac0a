use crate::model::{Polarity, PolaritySample};

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "buy", "growth", "profit", "up", "gain", "positive", "strong", "good",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "sell", "loss", "down", "fall", "negative", "weak", "bad", "decline",
];

/// Deterministic keyword scorer used when the remote classifier is
/// unavailable. Tokenizes on whitespace, lower-cased exact matches only.
pub fn keyword_sentiment(text: &str) -> PolaritySample {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    // Guard: scoring divides by the token count.
    if words.is_empty() {
        return PolaritySample {
            score: 0.0,
            label: Polarity::Negative,
            confidence: 0.0,
        };
    }

    let positive_count = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count() as f64;
    let negative_count = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count() as f64;

    let score = (positive_count - negative_count) / words.len() as f64;
    let label = if score > 0.0 {
        Polarity::Positive
    } else {
        Polarity::Negative
    };

    PolaritySample {
        score,
        label,
        confidence: score.abs(),
    }
}
