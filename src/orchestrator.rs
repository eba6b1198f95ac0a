use crate::analyzer::{DecisionEngine, IndicatorEngine};
use crate::classifier::{Classifier, TextGenerator};
use crate::model::{
    AnalysisError, MacdSignal, MarketSentiment, Polarity, PolaritySample, PriceSnapshot,
    Recommendation, StockAnalysis, TechnicalIndicators,
};
use crate::quotes::SnapshotProvider;

use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

// Same ±0.1 band as the batch trend classification, reused for the
// per-query sentiment label.
const SENTIMENT_LABEL_THRESHOLD: f64 = 0.1;

/// Runs the full analysis chain for one symbol and always returns a
/// well-formed result.
pub struct AnalysisOrchestrator {
    classifier: Arc<dyn Classifier>,
    quotes: Arc<dyn SnapshotProvider>,
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisOrchestrator {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        quotes: Arc<dyn SnapshotProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            classifier,
            quotes,
            generator,
        }
    }

    /// Analyzes one symbol against the given query text. No error escapes:
    /// any failure in the chain degrades to the neutral fallback analysis.
    pub async fn analyze(&self, symbol: &str, query: &str) -> StockAnalysis {
        match self.analyze_inner(symbol, query).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Stock analysis failed for {symbol}: {e}");
                Self::fallback_analysis(symbol)
            }
        }
    }

    async fn analyze_inner(
        &self,
        symbol: &str,
        query: &str,
    ) -> Result<StockAnalysis, AnalysisError> {
        // The snapshot fetch and the query classification are independent
        // suspension points; run them concurrently.
        let (snapshot, sentiment) = tokio::join!(
            self.quotes.snapshot(symbol),
            self.classifier.classify(query),
        );
        let snapshot = snapshot?;
        let sentiment = sentiment?;

        let indicators = IndicatorEngine::derive(&snapshot);
        let summary = self.summary(symbol, &snapshot, &sentiment).await;
        let decision = DecisionEngine::decide(&indicators, sentiment.score);

        Ok(StockAnalysis {
            summary,
            sentiment: sentiment_label(sentiment.score),
            confidence: sentiment.confidence,
            prediction: decision.prediction,
            technical_indicators: indicators,
            recommendation: decision.recommendation,
            generated_at: Utc::now(),
        })
    }

    /// Builds the summary text, preferring the hosted generator and falling
    /// back to a deterministic sentence.
    async fn summary(
        &self,
        symbol: &str,
        snapshot: &PriceSnapshot,
        sentiment: &PolaritySample,
    ) -> String {
        let label = match sentiment.label {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
        };
        let prompt = format!(
            "Analyze {symbol} stock: Current price {:.2}, change {}%. Market sentiment: {label}. Provide brief analysis.",
            snapshot.price, snapshot.change_percent
        );

        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Summary generation failed for {symbol}: {e}");
                fallback_summary(symbol, snapshot)
            }
        }
    }

    /// Neutral analysis returned when the chain fails anywhere.
    pub fn fallback_analysis(symbol: &str) -> StockAnalysis {
        StockAnalysis {
            summary: format!(
                "{symbol} shows mixed signals in current market conditions. Consider fundamental analysis alongside technical indicators for investment decisions."
            ),
            sentiment: MarketSentiment::Neutral,
            confidence: 0.6,
            prediction: "Market volatility suggests cautious approach with proper risk management."
                .to_string(),
            technical_indicators: TechnicalIndicators {
                rsi: 50.0,
                macd: MacdSignal::Neutral,
                support: 1000.0,
                resistance: 1100.0,
            },
            recommendation: Recommendation::Hold,
            generated_at: Utc::now(),
        }
    }
}

fn sentiment_label(score: f64) -> MarketSentiment {
    if score > SENTIMENT_LABEL_THRESHOLD {
        MarketSentiment::Bullish
    } else if score < -SENTIMENT_LABEL_THRESHOLD {
        MarketSentiment::Bearish
    } else {
        MarketSentiment::Neutral
    }
}

fn fallback_summary(symbol: &str, snapshot: &PriceSnapshot) -> String {
    let momentum = if snapshot.change_percent > 0.0 {
        "positive"
    } else {
        "negative"
    };
    format!(
        "{symbol} is currently trading at {:.2} with a {}% change. Technical analysis suggests {momentum} momentum in the short term.",
        snapshot.price, snapshot.change_percent
    )
}
