use crate::classifier::Classifier;
use crate::model::{BatchSentimentResult, ChannelScores, ClassifierError, PolaritySample, Trend};
use crate::utils::{mean, round2};

use futures::future::join_all;
use std::sync::Arc;
use tracing::warn;

// Channel weights: news carries the most weight (lower noise).
const REDDIT_WEIGHT: f64 = 0.3;
const TWITTER_WEIGHT: f64 = 0.3;
const NEWS_WEIGHT: f64 = 0.4;

// Overall score beyond ±0.1 flips the trend out of `stable`.
const TREND_THRESHOLD: f64 = 0.1;

/// Multi-channel sentiment aggregator.
pub struct SentimentAggregator {
    classifier: Arc<dyn Classifier>,
}

impl SentimentAggregator {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Classifies every text across the three channels concurrently and
    /// combines the per-channel averages into one weighted signal.
    ///
    /// Never fails: any classification error discards the whole batch and
    /// yields the fixed fallback result.
    pub async fn aggregate(
        &self,
        reddit_posts: &[String],
        tweets: &[String],
        news_headlines: &[String],
    ) -> BatchSentimentResult {
        match self.aggregate_inner(reddit_posts, tweets, news_headlines).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Batch sentiment analysis failed: {e}");
                Self::fallback()
            }
        }
    }

    async fn aggregate_inner(
        &self,
        reddit_posts: &[String],
        tweets: &[String],
        news_headlines: &[String],
    ) -> Result<BatchSentimentResult, ClassifierError> {
        // Fan out classification of all texts at once, fan in before any
        // averaging. No per-channel partial result.
        let (reddit, twitter, news) = tokio::join!(
            self.classify_channel(reddit_posts),
            self.classify_channel(tweets),
            self.classify_channel(news_headlines),
        );

        let reddit_avg = average_score(&reddit?);
        let twitter_avg = average_score(&twitter?);
        let news_avg = average_score(&news?);

        let overall = reddit_avg * REDDIT_WEIGHT + twitter_avg * TWITTER_WEIGHT + news_avg * NEWS_WEIGHT;
        let confidence = agreement_confidence(&[reddit_avg, twitter_avg, news_avg]);

        // Trend is classified on the full-precision value; rounding below is
        // display precision only.
        let trending = if overall > TREND_THRESHOLD {
            Trend::Up
        } else if overall < -TREND_THRESHOLD {
            Trend::Down
        } else {
            Trend::Stable
        };

        Ok(BatchSentimentResult {
            overall: round2(overall),
            sources: ChannelScores {
                reddit: round2(reddit_avg),
                twitter: round2(twitter_avg),
                news: round2(news_avg),
            },
            confidence,
            trending,
        })
    }

    async fn classify_channel(
        &self,
        texts: &[String],
    ) -> Result<Vec<PolaritySample>, ClassifierError> {
        let futures = texts.iter().map(|text| self.classifier.classify(text));
        join_all(futures).await.into_iter().collect()
    }

    /// Fixed result used when the batch cannot be classified at all.
    pub fn fallback() -> BatchSentimentResult {
        BatchSentimentResult {
            overall: 0.1,
            sources: ChannelScores {
                reddit: 0.05,
                twitter: 0.1,
                news: 0.15,
            },
            confidence: 0.7,
            trending: Trend::Stable,
        }
    }
}

fn average_score(samples: &[PolaritySample]) -> f64 {
    mean(&samples.iter().map(|s| s.score).collect::<Vec<f64>>())
}

/// Agreement between channel averages: population standard deviation mapped
/// so that zero spread gives confidence 1, large spread floors at 0.
fn agreement_confidence(scores: &[f64]) -> f64 {
    let avg = mean(scores);
    let variance = scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / scores.len() as f64;
    (1.0 - variance.sqrt()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Polarity;

    /// Parses the text itself as the score, so tests control channel
    /// averages directly.
    struct ScriptedClassifier;

    #[async_trait::async_trait]
    impl Classifier for ScriptedClassifier {
        async fn classify(&self, text: &str) -> Result<PolaritySample, ClassifierError> {
            let score: f64 = text.parse().map_err(|_| ClassifierError::InvalidResponse)?;
            Ok(PolaritySample {
                score,
                label: if score > 0.0 {
                    Polarity::Positive
                } else {
                    Polarity::Negative
                },
                confidence: score.abs(),
            })
        }
    }

    struct FailingClassifier;

    #[async_trait::async_trait]
    impl Classifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<PolaritySample, ClassifierError> {
            Err(ClassifierError::Http("service unavailable".into()))
        }
    }

    fn scores(values: &[f64]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn aggregator() -> SentimentAggregator {
        SentimentAggregator::new(Arc::new(ScriptedClassifier))
    }

    #[tokio::test]
    async fn weighted_overall_and_agreement_confidence() {
        let result = aggregator()
            .aggregate(&scores(&[0.4]), &scores(&[0.4]), &scores(&[0.8]))
            .await;

        // 0.3*0.4 + 0.3*0.4 + 0.4*0.8 = 0.56
        assert!((result.overall - 0.56).abs() < 1e-9);
        assert_eq!(result.sources.reddit, 0.4);
        assert_eq!(result.sources.twitter, 0.4);
        assert_eq!(result.sources.news, 0.8);
        // population stddev of [0.4, 0.4, 0.8] ≈ 0.1886
        assert!((result.confidence - 0.8114).abs() < 1e-3);
        assert_eq!(result.trending, Trend::Up);
    }

    #[tokio::test]
    async fn empty_batches_yield_zero_not_nan() {
        let result = aggregator().aggregate(&[], &[], &[]).await;

        assert_eq!(result.overall, 0.0);
        assert_eq!(result.sources.reddit, 0.0);
        assert_eq!(result.sources.twitter, 0.0);
        assert_eq!(result.sources.news, 0.0);
        // Three identical averages agree perfectly.
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.trending, Trend::Stable);
    }

    #[tokio::test]
    async fn single_empty_channel_averages_to_zero() {
        let result = aggregator()
            .aggregate(&scores(&[0.5, 0.5]), &[], &scores(&[0.5]))
            .await;

        assert_eq!(result.sources.twitter, 0.0);
        // 0.3*0.5 + 0.3*0.0 + 0.4*0.5 = 0.35
        assert!((result.overall - 0.35).abs() < 1e-9);
    }

    #[tokio::test]
    async fn trend_thresholds() {
        let up = aggregator()
            .aggregate(&scores(&[0.2]), &scores(&[0.2]), &scores(&[0.2]))
            .await;
        assert_eq!(up.trending, Trend::Up);

        let down = aggregator()
            .aggregate(&scores(&[-0.2]), &scores(&[-0.2]), &scores(&[-0.2]))
            .await;
        assert_eq!(down.trending, Trend::Down);

        let stable = aggregator()
            .aggregate(&scores(&[0.05]), &scores(&[0.05]), &scores(&[0.05]))
            .await;
        assert_eq!(stable.trending, Trend::Stable);
    }

    #[tokio::test]
    async fn disagreement_drives_confidence_toward_zero() {
        let result = aggregator()
            .aggregate(&scores(&[1.0]), &scores(&[-1.0]), &scores(&[1.0]))
            .await;
        // stddev of [1, -1, 1] ≈ 0.943
        assert!(result.confidence >= 0.0);
        assert!(result.confidence < 0.1);
    }

    #[tokio::test]
    async fn classifier_outage_returns_fixed_fallback() {
        let aggregator = SentimentAggregator::new(Arc::new(FailingClassifier));
        let result = aggregator
            .aggregate(
                &["post".to_string()],
                &["tweet".to_string()],
                &["headline".to_string()],
            )
            .await;

        assert_eq!(result, SentimentAggregator::fallback());
        assert_eq!(result.overall, 0.1);
        assert_eq!(result.sources.reddit, 0.05);
        assert_eq!(result.sources.twitter, 0.1);
        assert_eq!(result.sources.news, 0.15);
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.trending, Trend::Stable);
    }
}
