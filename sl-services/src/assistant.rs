//! AI-assisted callable functions.
//!
//! Transcription, text generation, and speech synthesis. These require an
//! authenticated caller but no particular role, and append no audit
//! entries. Provider failures are re-wrapped as `internal`.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use sl_api::AiClient;
use sl_core::error::{SlError, SlResult};

use crate::caller::{require_caller, Caller};

/// The AI operations the assistant functions depend on.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Transcribe raw audio to text.
    async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> SlResult<String>;

    /// Generate text from a prompt with optional system instructions.
    async fn generate_text(&self, prompt: &str, instructions: Option<&str>) -> SlResult<String>;

    /// Synthesize speech audio from text.
    async fn synthesize_speech(&self, text: &str, voice: Option<&str>) -> SlResult<Vec<u8>>;
}

#[async_trait]
impl LanguageModel for AiClient {
    async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> SlResult<String> {
        AiClient::transcribe(self, audio, language).await
    }

    async fn generate_text(&self, prompt: &str, instructions: Option<&str>) -> SlResult<String> {
        AiClient::generate_text(self, prompt, instructions).await
    }

    async fn synthesize_speech(&self, text: &str, voice: Option<&str>) -> SlResult<Vec<u8>> {
        AiClient::synthesize_speech(self, text, voice).await
    }
}

/// Request to transcribe an audio clip.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeRequest {
    /// Base64-encoded audio bytes.
    pub audio: String,
    pub language: Option<String>,
}

/// Transcription result.
#[derive(Debug, Clone, Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub text: String,
}

/// Request to generate text.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: String,
    pub instructions: Option<String>,
}

/// Text generation result.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateTextResponse {
    pub success: bool,
    pub text: String,
}

/// Request to synthesize speech.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeSpeechRequest {
    pub text: String,
    pub voice: Option<String>,
}

/// Speech synthesis result.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizeSpeechResponse {
    pub success: bool,
    /// Base64-encoded audio bytes.
    pub audio: String,
}

/// AI-assisted callable functions.
pub struct AssistantFunctions {
    model: Arc<dyn LanguageModel>,
}

impl AssistantFunctions {
    /// Create the function set over a language model.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Transcribe a base64-encoded audio clip.
    pub async fn transcribe(
        &self,
        caller: Option<&Caller>,
        request: &TranscribeRequest,
    ) -> SlResult<TranscribeResponse> {
        require_caller(caller)?;

        if request.audio.trim().is_empty() {
            return Err(SlError::InvalidArgument("audio is required".into()));
        }
        let audio = BASE64
            .decode(request.audio.trim())
            .map_err(|_| SlError::InvalidArgument("audio must be valid base64".into()))?;

        let text = self
            .model
            .transcribe(&audio, request.language.as_deref())
            .await
            .map_err(|e| e.or_internal("transcription failed"))?;

        Ok(TranscribeResponse {
            success: true,
            text,
        })
    }

    /// Generate text from a prompt.
    pub async fn generate_text(
        &self,
        caller: Option<&Caller>,
        request: &GenerateTextRequest,
    ) -> SlResult<GenerateTextResponse> {
        require_caller(caller)?;

        if request.prompt.trim().is_empty() {
            return Err(SlError::InvalidArgument("prompt is required".into()));
        }

        let text = self
            .model
            .generate_text(&request.prompt, request.instructions.as_deref())
            .await
            .map_err(|e| e.or_internal("text generation failed"))?;

        Ok(GenerateTextResponse {
            success: true,
            text,
        })
    }

    /// Synthesize speech from text.
    pub async fn synthesize_speech(
        &self,
        caller: Option<&Caller>,
        request: &SynthesizeSpeechRequest,
    ) -> SlResult<SynthesizeSpeechResponse> {
        require_caller(caller)?;

        if request.text.trim().is_empty() {
            return Err(SlError::InvalidArgument("text is required".into()));
        }

        let audio = self
            .model
            .synthesize_speech(&request.text, request.voice.as_deref())
            .await
            .map_err(|e| e.or_internal("speech synthesis failed"))?;

        Ok(SynthesizeSpeechResponse {
            success: true,
            audio: BASE64.encode(audio),
        })
    }
}
