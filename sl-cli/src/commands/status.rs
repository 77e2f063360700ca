//! Status command.

use console::style;

use sl_core::config::AppConfig;
use sl_core::error::SlResult;

use crate::OutputFormat;

pub async fn run(config: &AppConfig, format: OutputFormat) -> SlResult<()> {
    if !config.is_backend_configured() {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"configured": false}));
            }
            OutputFormat::Text => {
                println!(
                    "{} backend is not configured (set backend.base_url in the config file)",
                    style("!").yellow()
                );
            }
        }
        return Ok(());
    }

    let db = super::open_database(config)?;
    let api = super::build_api_client(config, &db)?;

    match api.health_check().await {
        Ok(latency) => match format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "configured": true,
                        "reachable": true,
                        "latency_ms": latency.as_millis() as u64,
                        "base_url": api.base_url(),
                    })
                );
            }
            OutputFormat::Text => {
                println!(
                    "{} backend reachable at {} ({} ms)",
                    style("✓").green(),
                    api.base_url(),
                    latency.as_millis()
                );
            }
        },
        Err(e) => match format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "configured": true,
                        "reachable": false,
                        "error": e.to_string(),
                    })
                );
            }
            OutputFormat::Text => {
                println!("{} backend unreachable: {e}", style("✗").red());
            }
        },
    }

    Ok(())
}
