//! Credential store commands.

use clap::Subcommand;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use sl_core::config::AppConfig;
use sl_core::error::SlResult;
use sl_models::Credentials;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CredsAction {
    /// List stored credential keys (values masked).
    List,
    /// Print a stored credential value.
    Get { key: String },
    /// Store a credential value.
    Set { key: String, value: String },
    /// Delete a stored credential.
    Delete { key: String },
    /// Delete all stored credentials.
    Clear,
}

/// Mask a secret for display: keep the first four characters.
fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{visible}…")
}

pub async fn run(config: &AppConfig, action: CredsAction, format: OutputFormat) -> SlResult<()> {
    let db = super::open_database(config)?;
    let conn = db.conn()?;

    match action {
        CredsAction::List => {
            let all = Credentials::get_all(&conn)?;
            match format {
                OutputFormat::Json => {
                    let keys: Vec<&String> = all.keys().collect();
                    println!("{}", serde_json::to_string(&keys)?);
                }
                OutputFormat::Text => {
                    if all.is_empty() {
                        println!("No stored credentials.");
                    } else {
                        let mut table = Table::new();
                        table
                            .load_preset(UTF8_FULL)
                            .apply_modifier(UTF8_ROUND_CORNERS)
                            .set_content_arrangement(ContentArrangement::Dynamic);
                        table.set_header(vec!["Key", "Value"]);

                        let mut entries: Vec<_> = all.iter().collect();
                        entries.sort_by_key(|(k, _)| k.as_str());
                        for (key, value) in entries {
                            table.add_row(vec![key.clone(), mask(value)]);
                        }
                        println!("{table}");
                    }
                }
            }
        }
        CredsAction::Get { key } => match Credentials::get(&conn, &key)? {
            Some(value) => println!("{value}"),
            None => println!("{} no credential stored for {key}", style("!").yellow()),
        },
        CredsAction::Set { key, value } => {
            Credentials::set(&conn, &key, &value)?;
            println!("{} stored {key}", style("✓").green());
        }
        CredsAction::Delete { key } => {
            if Credentials::delete(&conn, &key)? {
                println!("{} deleted {key}", style("✓").green());
            } else {
                println!("{} no credential stored for {key}", style("!").yellow());
            }
        }
        CredsAction::Clear => {
            Credentials::clear(&conn)?;
            println!("{} cleared all stored credentials", style("✓").green());
        }
    }

    Ok(())
}
