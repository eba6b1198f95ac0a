use crate::config::ClassifierConfig;
use crate::model::{ClassifierError, Polarity, PolaritySample};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
}

/// Client for the hosted inference API (free tier, no API key).
pub struct HfClient {
    client: Client,
    base_url: String,
    sentiment_model: String,
    generation_model: String,
}

impl HfClient {
    pub fn new(cfg: &ClassifierConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_seconds))
            .build()
            .expect("❗ Failed to create HTTP client");

        Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            sentiment_model: cfg.sentiment_model.clone(),
            generation_model: cfg.generation_model.clone(),
        }
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    fn map_send_error(e: reqwest::Error) -> ClassifierError {
        if e.is_timeout() {
            ClassifierError::Timeout
        } else {
            ClassifierError::Http(e.to_string())
        }
    }

    /// Classifies one text and normalizes the result into a signed polarity
    /// sample: POSITIVE keeps the raw score, NEGATIVE flips its sign.
    pub async fn text_classification(&self, text: &str) -> Result<PolaritySample, ClassifierError> {
        let url = self.model_url(&self.sentiment_model);
        let body = serde_json::json!({ "inputs": text });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(ClassifierError::Http(format!(
                "classification request failed [{}]",
                response.status()
            )));
        }

        // The API nests results one level per input: [[{label, score}, ...]]
        let parsed: Vec<Vec<LabelScore>> = response
            .json()
            .await
            .map_err(|_| ClassifierError::InvalidResponse)?;

        let top = parsed
            .first()
            .and_then(|scores| scores.first())
            .ok_or(ClassifierError::InvalidResponse)?;

        debug!("Classified text: {} ({:.4})", top.label, top.score);

        let (score, label) = match top.label.as_str() {
            "POSITIVE" => (top.score, Polarity::Positive),
            "NEGATIVE" => (-top.score, Polarity::Negative),
            _ => return Err(ClassifierError::InvalidResponse),
        };

        Ok(PolaritySample {
            score,
            label,
            confidence: top.score,
        })
    }

    /// Generates a short free-form text from the prompt.
    pub async fn text_generation(&self, prompt: &str) -> Result<String, ClassifierError> {
        let url = self.model_url(&self.generation_model);
        let body = serde_json::json!({
            "inputs": prompt,
            "parameters": GenerationParameters {
                max_new_tokens: 100,
                temperature: 0.7,
            },
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(ClassifierError::Http(format!(
                "generation request failed [{}]",
                response.status()
            )));
        }

        let parsed: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|_| ClassifierError::InvalidResponse)?;

        let generated = parsed
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClassifierError::InvalidResponse)?;

        Ok(generated)
    }
}

#[async_trait::async_trait]
impl crate::classifier::Classifier for HfClient {
    async fn classify(&self, text: &str) -> Result<PolaritySample, ClassifierError> {
        self.text_classification(text).await
    }
}

#[async_trait::async_trait]
impl crate::classifier::TextGenerator for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String, ClassifierError> {
        self.text_generation(prompt).await
    }
}
