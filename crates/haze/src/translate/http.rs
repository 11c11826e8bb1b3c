//! Client for a LibreTranslate-compatible translation service.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{TranslationError, Translator};
use crate::config::HazeConfig;
use crate::types::LanguageTag;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Translates through `POST {base_url}/translate`.
///
/// Every request is bounded by the configured timeout and made exactly once.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpTranslator {
    /// Create a client for the service at `base_url`.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TranslationError::Unreachable {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/translate", base_url.trim_end_matches('/')),
            api_key: None,
            timeout,
        })
    }

    /// Create a client from `config`, failing with
    /// [`TranslationError::Unavailable`] when no service URL is set.
    pub fn from_config(config: &HazeConfig) -> Result<Self, TranslationError> {
        let url = config
            .translate_url
            .as_deref()
            .ok_or(TranslationError::Unavailable)?;
        let translator = Self::new(url, config.translate_timeout, config.connect_timeout)?;
        Ok(match &config.translate_api_key {
            Some(key) => translator.with_api_key(key.clone()),
            None => translator,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_error(&self, error: &reqwest::Error) -> TranslationError {
        if error.is_timeout() {
            TranslationError::Timeout {
                after: self.timeout,
            }
        } else {
            TranslationError::Unreachable {
                message: error.to_string(),
            }
        }
    }
}

impl Translator for HttpTranslator {
    fn translate(
        &self,
        text: &str,
        from: LanguageTag,
        to: LanguageTag,
    ) -> Result<String, TranslationError> {
        let body = TranslateRequest {
            q: text,
            source: from.code(),
            target: to.code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };
        debug!(
            endpoint = %self.endpoint,
            %from,
            %to,
            chars = text.chars().count(),
            "Sending translation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| {
                let error = self.request_error(&e);
                warn!(endpoint = %self.endpoint, %error, "Translation request failed");
                error
            })?;

        let status = response.status();
        let content = response.text().map_err(|e| self.request_error(&e))?;
        if !status.is_success() {
            let message = error_message(&content);
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                %message,
                "Translation service returned an error"
            );
            return Err(TranslationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        parse_translation(&content)
    }
}

fn parse_translation(content: &str) -> Result<String, TranslationError> {
    serde_json::from_str::<TranslateResponse>(content)
        .map(|r| r.translated_text)
        .map_err(|e| TranslationError::MalformedResponse {
            message: e.to_string(),
        })
}

fn error_message(content: &str) -> String {
    serde_json::from_str::<ErrorResponse>(content)
        .map(|r| r.error)
        .unwrap_or_else(|_| content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_omits_missing_key() {
        let body = TranslateRequest {
            q: "hola",
            source: "es",
            target: "en",
            format: "text",
            api_key: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"q":"hola","source":"es","target":"en","format":"text"}"#
        );
    }

    #[test]
    fn parses_translated_text() {
        assert_eq!(
            parse_translation(r#"{"translatedText": "hello"}"#).unwrap(),
            "hello"
        );
    }

    #[test]
    fn rejects_unexpected_body() {
        assert!(matches!(
            parse_translation(r#"{"text": "hello"}"#),
            Err(TranslationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn error_message_prefers_service_error_field() {
        assert_eq!(error_message(r#"{"error": "Invalid API key"}"#), "Invalid API key");
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn endpoint_joins_base_url() {
        let translator = HttpTranslator::new(
            "http://localhost:5000/",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(translator.endpoint(), "http://localhost:5000/translate");
    }

    #[test]
    fn from_config_requires_url() {
        assert!(matches!(
            HttpTranslator::from_config(&HazeConfig::default()),
            Err(TranslationError::Unavailable)
        ));
    }

    #[test]
    fn closed_port_is_unreachable() {
        let translator = HttpTranslator::new(
            "http://127.0.0.1:1",
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
        .unwrap();
        let result = translator.translate("hola", LanguageTag::Spanish, LanguageTag::English);
        assert!(matches!(result, Err(TranslationError::Unreachable { .. })));
    }
}
