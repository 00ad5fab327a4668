//! Model-backed emotion classifier over HTTP.
//!
//! Speaks the common text-classification inference protocol: POST
//! `{"inputs": text}` and receive `[{"label", "score"}, ...]`, possibly
//! wrapped in one more list. Labels outside the emotion set (e.g. `disgust`)
//! are ignored.

use std::time::Duration;

use serde::Deserialize;

use super::{Emotion, EmotionClassifier, EmotionProfile};
use crate::config::EmotionConfig;
use crate::error::{EmotionError, EmotionResult};

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

/// Remote emotion model reached through a blocking HTTP agent.
pub struct HttpEmotionClassifier {
    endpoint: String,
    api_token: Option<String>,
    agent: ureq::Agent,
}

impl HttpEmotionClassifier {
    pub fn new(endpoint: impl Into<String>, api_token: Option<String>, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();
        Self {
            endpoint: endpoint.into(),
            api_token,
            agent,
        }
    }

    /// Build from config; `None` when no endpoint is configured.
    pub fn from_config(config: &EmotionConfig) -> Option<Self> {
        config
            .endpoint
            .as_ref()
            .map(|url| Self::new(url.clone(), config.api_token.clone(), config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmotionClassifier for HttpEmotionClassifier {
    fn name(&self) -> &str {
        "http"
    }

    fn classify(&self, text: &str) -> EmotionResult<EmotionProfile> {
        let body = serde_json::json!({ "inputs": text });
        let body_str = serde_json::to_string(&body).map_err(|e| EmotionError::Request {
            message: format!("JSON serialize error: {e}"),
        })?;

        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json");
        if let Some(token) = &self.api_token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let resp = request
            .send_string(&body_str)
            .map_err(|e: ureq::Error| EmotionError::Request {
                message: e.to_string(),
            })?;
        let resp_str = resp.into_string().map_err(|e| EmotionError::Payload {
            message: e.to_string(),
        })?;

        tracing::debug!(endpoint = %self.endpoint, bytes = resp_str.len(), "emotion model replied");
        parse_payload(&resp_str)
    }
}

/// Decode a label/score payload into a profile.
pub(crate) fn parse_payload(raw: &str) -> EmotionResult<EmotionProfile> {
    let payload: Payload = serde_json::from_str(raw).map_err(|e| EmotionError::Payload {
        message: e.to_string(),
    })?;
    let labels = match payload {
        Payload::Nested(mut outer) => {
            if outer.is_empty() {
                Vec::new()
            } else {
                outer.swap_remove(0)
            }
        }
        Payload::Flat(labels) => labels,
    };

    let known: Vec<(Emotion, f64)> = labels
        .iter()
        .filter_map(|ls| Emotion::parse(&ls.label).map(|e| (e, ls.score)))
        .collect();
    if known.is_empty() {
        return Err(EmotionError::Payload {
            message: "no recognised emotion labels in response".into(),
        });
    }

    let profile = EmotionProfile::from_intensities(known.iter().copied());
    Ok(match known.iter().find(|(e, _)| *e == Emotion::Neutral) {
        Some(&(_, neutral)) => profile.with(Emotion::Neutral, neutral),
        None => profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_payload_with_model_neutral() {
        let raw = r#"[[{"label":"joy","score":0.81},{"label":"neutral","score":0.12},{"label":"disgust","score":0.07}]]"#;
        let p = parse_payload(raw).unwrap();
        assert!((p.joy - 0.81).abs() < 1e-9);
        assert!((p.neutral - 0.12).abs() < 1e-9);
        assert_eq!(p.anger, 0.0);
    }

    #[test]
    fn parses_flat_payload_and_derives_neutral() {
        let raw = r#"[{"label":"FEAR","score":0.5},{"label":"sadness","score":0.25}]"#;
        let p = parse_payload(raw).unwrap();
        assert!((p.fear - 0.5).abs() < 1e-9);
        assert!((p.neutral - 0.25).abs() < 1e-9);
    }

    #[test]
    fn rejects_unusable_payloads() {
        assert!(matches!(
            parse_payload(r#"{"error":"model loading"}"#),
            Err(EmotionError::Payload { .. })
        ));
        assert!(matches!(
            parse_payload(r#"[{"label":"LABEL_0","score":0.9}]"#),
            Err(EmotionError::Payload { .. })
        ));
        assert!(parse_payload("[[]]").is_err());
    }

    #[test]
    fn unreachable_endpoint_is_a_request_error() {
        let classifier = HttpEmotionClassifier::new("http://127.0.0.1:9/classify", None, 1);
        assert!(matches!(
            classifier.classify("hello"),
            Err(EmotionError::Request { .. })
        ));
    }

    #[test]
    fn from_config_requires_endpoint() {
        assert!(HttpEmotionClassifier::from_config(&EmotionConfig::default()).is_none());
        let config = EmotionConfig {
            endpoint: Some("http://localhost:8080".into()),
            ..EmotionConfig::default()
        };
        let classifier = HttpEmotionClassifier::from_config(&config).unwrap();
        assert_eq!(classifier.endpoint(), "http://localhost:8080");
    }
}
