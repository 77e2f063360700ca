//! AI provider client.
//!
//! Covers the three operations the platform delegates to the AI provider:
//! audio transcription (multipart upload), text generation, and speech
//! synthesis. Provider failures surface with the status and body
//! preserved; the caller decides how to re-wrap them.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::debug;

use sl_core::config::AiConfig;
use sl_core::error::{SlError, SlResult};

use crate::client::classify_transport_error;

/// Client for the AI provider's REST API.
#[derive(Clone, Debug)]
pub struct AiClient {
    inner: Client,
    base_url: String,
    api_key: String,
    transcription_model: String,
    text_model: String,
    speech_model: String,
    voice: String,
}

impl AiClient {
    /// Create a new AiClient from AI configuration.
    pub fn new(config: &AiConfig) -> SlResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SlError::MissingConfig("ai.api_key".into()));
        }

        let inner = Client::builder()
            .timeout(Duration::from_millis(sl_core::constants::DEFAULT_API_TIMEOUT_MS))
            .build()
            .map_err(|e| SlError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            transcription_model: config.transcription_model.clone(),
            text_model: config.text_model.clone(),
            speech_model: config.speech_model.clone(),
            voice: config.voice.clone(),
        })
    }

    /// Transcribe an audio clip to text.
    pub async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> SlResult<String> {
        let part = Part::bytes(audio.to_vec())
            .file_name("audio.m4a")
            .mime_str("audio/mp4")
            .map_err(|e| SlError::Http(format!("invalid audio part: {e}")))?;

        let mut form = Form::new()
            .text("model", self.transcription_model.clone())
            .part("file", part);
        if let Some(lang) = language {
            form = form.text("language", lang.to_string());
        }

        debug!("POST /audio/transcriptions ({} bytes)", audio.len());

        let response = self
            .inner
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SlError::Serialization(format!("failed to parse transcription: {e}")))?;

        body.get("text")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| SlError::Http("transcription response missing text".into()))
    }

    /// Generate text from a prompt, with optional system instructions.
    pub async fn generate_text(
        &self,
        prompt: &str,
        instructions: Option<&str>,
    ) -> SlResult<String> {
        let mut messages = Vec::new();
        if let Some(system) = instructions {
            messages.push(serde_json::json!({"role": "system", "content": system}));
        }
        messages.push(serde_json::json!({"role": "user", "content": prompt}));

        let body = serde_json::json!({
            "model": self.text_model,
            "messages": messages,
        });

        debug!("POST /chat/completions");

        let response = self
            .inner
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;
        let response = Self::check_status(response).await?;

        let completion = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SlError::Serialization(format!("failed to parse completion: {e}")))?;

        completion
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| SlError::Http("completion response missing content".into()))
    }

    /// Synthesize speech audio from text. Returns raw audio bytes.
    pub async fn synthesize_speech(&self, text: &str, voice: Option<&str>) -> SlResult<Vec<u8>> {
        let body = serde_json::json!({
            "model": self.speech_model,
            "voice": voice.unwrap_or(&self.voice),
            "input": text,
        });

        debug!("POST /audio/speech");

        let response = self
            .inner
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;
        let response = Self::check_status(response).await?;

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| SlError::Http(format!("failed to read audio bytes: {e}")))
    }

    /// Map any non-success provider status to a server error.
    ///
    /// Provider-side auth failures stay `internal` rather than mapping to
    /// the caller-facing `unauthenticated` kind.
    async fn check_status(response: Response) -> SlResult<Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SlError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
