pub mod hf;
pub mod lexicon;
pub mod traits;

pub use hf::HfClient;
pub use traits::{Classifier, TextGenerator};

use crate::model::{ClassifierError, PolaritySample};
use std::sync::Arc;
use tracing::warn;

/// Classifier that never fails: delegates to the remote classifier and
/// absorbs any error with the local keyword scorer.
pub struct FallbackClassifier {
    remote: Arc<dyn Classifier>,
}

impl FallbackClassifier {
    pub fn new(remote: Arc<dyn Classifier>) -> Self {
        Self { remote }
    }
}

#[async_trait::async_trait]
impl Classifier for FallbackClassifier {
    async fn classify(&self, text: &str) -> Result<PolaritySample, ClassifierError> {
        match self.remote.classify(text).await {
            Ok(sample) => Ok(sample),
            Err(e) => {
                warn!("Remote classification failed, using keyword fallback: {e}");
                Ok(lexicon::keyword_sentiment(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Polarity;

    struct FailingClassifier;

    #[async_trait::async_trait]
    impl Classifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<PolaritySample, ClassifierError> {
            Err(ClassifierError::Timeout)
        }
    }

    struct FixedClassifier(f64);

    #[async_trait::async_trait]
    impl Classifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> Result<PolaritySample, ClassifierError> {
            Ok(PolaritySample {
                score: self.0,
                label: if self.0 > 0.0 {
                    Polarity::Positive
                } else {
                    Polarity::Negative
                },
                confidence: self.0.abs(),
            })
        }
    }

    #[tokio::test]
    async fn passes_through_remote_result() {
        let classifier = FallbackClassifier::new(Arc::new(FixedClassifier(0.9)));
        let sample = classifier.classify("anything").await.unwrap();
        assert_eq!(sample.score, 0.9);
        assert_eq!(sample.label, Polarity::Positive);
    }

    #[tokio::test]
    async fn falls_back_to_lexicon_on_remote_failure() {
        let classifier = FallbackClassifier::new(Arc::new(FailingClassifier));
        let sample = classifier.classify("strong growth ahead").await.unwrap();
        assert!(sample.score > 0.0, "keyword fallback should score the text");
    }

    #[tokio::test]
    async fn fallback_never_errors() {
        let classifier = FallbackClassifier::new(Arc::new(FailingClassifier));
        assert!(classifier.classify("").await.is_ok());
        assert!(classifier.classify("no keywords here").await.is_ok());
    }
}
