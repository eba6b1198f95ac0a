// Core structs: PolaritySample, BatchSentimentResult, StockAnalysis
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Classifier output label for a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Per-text classification result. Score is signed: the classifier's raw
/// confidence carries the label's sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolaritySample {
    pub score: f64,
    pub label: Polarity,
    pub confidence: f64,
}

/// The three fixed text origins. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Reddit,
    Twitter,
    News,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Reddit, Channel::Twitter, Channel::News];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average sentiment score per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelScores {
    pub reddit: f64,
    pub twitter: f64,
    pub news: f64,
}

impl ChannelScores {
    pub const fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Reddit => self.reddit,
            Channel::Twitter => self.twitter,
            Channel::News => self.news,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Aggregated multi-channel sentiment. Recomputed on every call, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSentimentResult {
    pub overall: f64,
    pub sources: ChannelScores,
    pub confidence: f64,
    pub trending: Trend,
}

/// Latest price and percent change for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    pub price: f64,
    pub change_percent: f64,
}

/// MACD crossover direction. `Neutral` only appears in the fallback
/// analysis, never from indicator derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdSignal {
    #[serde(rename = "bullish crossover")]
    BullishCrossover,
    #[serde(rename = "bearish crossover")]
    BearishCrossover,
    #[serde(rename = "neutral")]
    Neutral,
}

impl fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BullishCrossover => "bullish crossover",
            Self::BearishCrossover => "bearish crossover",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Derived indicators for one snapshot. `support < price < resistance`
/// holds by construction for any positive price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TechnicalIndicators {
    pub rsi: f64,
    pub macd: MacdSignal,
    pub support: f64,
    pub resistance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

/// Terminal artifact of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAnalysis {
    pub summary: String,
    pub sentiment: MarketSentiment,
    pub confidence: f64,
    pub prediction: String,
    pub technical_indicators: TechnicalIndicators,
    pub recommendation: Recommendation,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("http error: {0}")]
    Http(String),
    #[error("classifier request timed out")]
    Timeout,
    #[error("invalid classifier response")]
    InvalidResponse,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote source error: {0}")]
    Source(String),
}

/// Anything that can interrupt the full analysis chain.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Quote(#[from] QuoteError),
}
