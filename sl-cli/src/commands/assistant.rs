//! AI assistant commands.

use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::Subcommand;
use console::style;

use sl_api::AiClient;
use sl_core::config::AppConfig;
use sl_core::error::{SlError, SlResult};
use sl_models::models::credential::keys;
use sl_models::Credentials;
use sl_services::assistant::{
    GenerateTextRequest, SynthesizeSpeechRequest, TranscribeRequest,
};
use sl_services::AssistantFunctions;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum AssistantAction {
    /// Transcribe an audio file to text.
    Transcribe {
        /// Path to the audio file.
        file: PathBuf,
        /// Spoken language hint (e.g. "en").
        #[arg(long)]
        language: Option<String>,
    },
    /// Generate text from a prompt.
    Generate {
        /// The prompt.
        prompt: String,
        /// Optional system instructions.
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Synthesize speech audio from text.
    Speak {
        /// Text to read aloud.
        text: String,
        /// Voice override.
        #[arg(long)]
        voice: Option<String>,
        /// Output audio file path.
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub async fn run(
    config: &AppConfig,
    action: AssistantAction,
    format: OutputFormat,
) -> SlResult<()> {
    let db = super::open_database(config)?;
    let caller = super::stored_caller(&db)?;

    // The config-file API key wins; otherwise the stored credential is used.
    let mut ai_config = config.ai.clone();
    if ai_config.api_key.is_empty() {
        let conn = db.conn()?;
        if let Some(key) = Credentials::get(&conn, keys::AI_API_KEY)? {
            ai_config.api_key = key;
        }
    }

    let functions = AssistantFunctions::new(Arc::new(AiClient::new(&ai_config)?));

    match action {
        AssistantAction::Transcribe { file, language } => {
            let audio = BASE64.encode(std::fs::read(&file)?);
            let request = TranscribeRequest { audio, language };
            let response = functions.transcribe(Some(&caller), &request).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
                OutputFormat::Text => println!("{}", response.text),
            }
        }
        AssistantAction::Generate {
            prompt,
            instructions,
        } => {
            let request = GenerateTextRequest {
                prompt,
                instructions,
            };
            let response = functions.generate_text(Some(&caller), &request).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
                OutputFormat::Text => println!("{}", response.text),
            }
        }
        AssistantAction::Speak {
            text,
            voice,
            output,
        } => {
            let request = SynthesizeSpeechRequest { text, voice };
            let response = functions.synthesize_speech(Some(&caller), &request).await?;
            let audio = BASE64
                .decode(&response.audio)
                .map_err(|e| SlError::Serialization(format!("bad audio payload: {e}")))?;
            std::fs::write(&output, audio)?;
            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({"success": true, "output": output.display().to_string()})
                    );
                }
                OutputFormat::Text => {
                    println!("{} audio written to {}", style("✓").green(), output.display());
                }
            }
        }
    }

    Ok(())
}
