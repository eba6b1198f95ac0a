use crate::model::{Recommendation, TechnicalIndicators};

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

// Sentiment must clear ±0.2 to contribute a directional signal.
const SENTIMENT_SIGNAL_THRESHOLD: f64 = 0.2;

// Combined signal beyond ±0.3 leaves the sideways bucket.
const MOMENTUM_THRESHOLD: f64 = 0.3;

/// Fused directional call for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub prediction: String,
    pub recommendation: Recommendation,
}

pub struct DecisionEngine;

impl DecisionEngine {
    /// Fuses the oscillator and the sentiment score into a prediction text
    /// and a discrete recommendation.
    pub fn decide(indicators: &TechnicalIndicators, sentiment_score: f64) -> Decision {
        let combined = Self::combined_signal(indicators.rsi, sentiment_score);

        let prediction = if combined > MOMENTUM_THRESHOLD {
            "Strong upward momentum expected. Technical indicators and sentiment align bullishly."
        } else if combined < -MOMENTUM_THRESHOLD {
            "Downward pressure likely. Technical indicators and sentiment suggest caution."
        } else {
            "Sideways movement expected. Mixed signals from technical and sentiment analysis."
        };

        Decision {
            prediction: prediction.to_string(),
            recommendation: Self::recommendation(indicators.rsi, sentiment_score),
        }
    }

    /// Averaged technical + sentiment signal, range {-1, -0.5, 0, 0.5, 1}.
    fn combined_signal(rsi: f64, sentiment_score: f64) -> f64 {
        // Overbought reads bearish, oversold reads bullish.
        let technical_signal = if rsi > RSI_OVERBOUGHT {
            -1.0
        } else if rsi < RSI_OVERSOLD {
            1.0
        } else {
            0.0
        };

        let sentiment_signal = if sentiment_score > SENTIMENT_SIGNAL_THRESHOLD {
            1.0
        } else if sentiment_score < -SENTIMENT_SIGNAL_THRESHOLD {
            -1.0
        } else {
            0.0
        };

        (technical_signal + sentiment_signal) / 2.0
    }

    /// Recommendation rule, deliberately independent of the combined signal:
    /// it re-tests the strict RSI bounds against the raw sentiment sign.
    fn recommendation(rsi: f64, sentiment_score: f64) -> Recommendation {
        if rsi < RSI_OVERSOLD && sentiment_score > 0.0 {
            Recommendation::Buy
        } else if rsi > RSI_OVERBOUGHT && sentiment_score < 0.0 {
            Recommendation::Sell
        } else {
            Recommendation::Hold
        }
    }
}
