//! Command handlers for the `tavernkeep-engine` binary.
//!
//! ```text
//! tavernkeep-engine derive <sheet.json>   derive a character sheet
//! tavernkeep-engine rolls <log.json>      classify and tally a roll log
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tavernkeep_domain::{CharacterSheet, DiceRollRecord};

use crate::app::App;
use crate::ids::CharacterId;
use crate::use_cases::character_stats::CharacterStatsError;
use crate::use_cases::roll_log::{CriticalTally, RecordedRoll, RollLogError};

pub const USAGE: &str = "usage: tavernkeep-engine <derive <sheet.json> | rolls <log.json>>";

/// Errors surfaced by the command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Stats(#[from] CharacterStatsError),

    #[error(transparent)]
    Rolls(#[from] RollLogError),

    #[error("Failed to render output: {0}")]
    Output(serde_json::Error),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Derive(PathBuf),
    Rolls(PathBuf),
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect();
        match args.as_slice() {
            [cmd, path] if cmd == "derive" => Ok(Self::Derive(PathBuf::from(path))),
            [cmd, path] if cmd == "rolls" => Ok(Self::Rolls(PathBuf::from(path))),
            [cmd, ..] if cmd == "derive" || cmd == "rolls" => {
                let message = format!("`{cmd}` takes exactly one file argument\n{USAGE}");
                Err(CliError::Usage(message))
            }
            [cmd, ..] => {
                let message = format!("unknown command `{cmd}`\n{USAGE}");
                Err(CliError::Usage(message))
            }
            [] => Err(CliError::Usage(USAGE.to_string())),
        }
    }
}

/// Output of the `rolls` command: every replayed roll in file order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollReport {
    pub character_id: CharacterId,
    pub rolls: Vec<RecordedRoll>,
    pub tally: CriticalTally,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a character sheet and reject duplicate ability keys.
pub fn load_sheet(path: &Path) -> Result<CharacterSheet, CliError> {
    let sheet: CharacterSheet = read_json(path)?;
    sheet
        .validate()
        .map_err(|e| CliError::Stats(CharacterStatsError::Domain(e)))?;
    Ok(sheet)
}

/// Load a JSON array of `{ "formula": ..., "result": ... }` records.
pub fn load_roll_records(path: &Path) -> Result<Vec<DiceRollRecord>, CliError> {
    read_json(path)
}

/// Run a command against the application and render its output as JSON.
pub async fn run(app: &App, command: &Command) -> Result<String, CliError> {
    match command {
        Command::Derive(path) => {
            let sheet = load_sheet(path)?;
            let view = app.use_cases.character_stats.derive_sheet(&sheet)?;
            serde_json::to_string_pretty(&view).map_err(CliError::Output)
        }
        Command::Rolls(path) => {
            let records = load_roll_records(path)?;
            let character_id = CharacterId::new();
            tracing::info!(%character_id, count = records.len(), "Replaying roll log");

            // Report what was replayed; the history query is capped by config.
            let mut rolls = Vec::with_capacity(records.len());
            for record in records {
                rolls.push(
                    app.use_cases
                        .roll_log
                        .record_roll(character_id, record)
                        .await?,
                );
            }
            let report = RollReport {
                character_id,
                tally: CriticalTally::from_rolls(&rolls),
                rolls,
            };
            serde_json::to_string_pretty(&report).map_err(CliError::Output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse(["derive", "sheet.json"]).expect("parse"),
            Command::Derive(PathBuf::from("sheet.json"))
        );
        assert_eq!(
            Command::parse(["rolls", "log.json"]).expect("parse"),
            Command::Rolls(PathBuf::from("log.json"))
        );
        assert!(matches!(
            Command::parse(Vec::<String>::new()),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(Command::parse(["derive"]), Err(CliError::Usage(_))));
        assert!(matches!(
            Command::parse(["explode", "x"]),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn load_sheet_reports_bad_json() {
        let file = write_temp("{ not json");
        let err = load_sheet(file.path()).expect_err("should fail");
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn load_sheet_rejects_duplicate_abilities() {
        let file = write_temp(
            r#"{
                "abilities": [
                    { "key": "str", "label": "Strength", "value": 12 },
                    { "key": "str", "label": "Strength", "value": 14 }
                ]
            }"#,
        );
        let err = load_sheet(file.path()).expect_err("should fail");
        assert!(matches!(
            err,
            CliError::Stats(CharacterStatsError::Domain(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_roll_records(&dir.path().join("absent.json"))
            .expect_err("should fail");
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[tokio::test]
    async fn derive_renders_sheet_view() {
        let file = write_temp(
            r#"{
                "system": "dnd5e",
                "abilities": [{ "key": "dex", "label": "Dexterity", "value": 14 }],
                "armorClass": { "base": 10, "attribute": 2, "bonus": 1 },
                "health": { "current": 12, "max": 30, "temporary": 0 },
                "rolls": [{ "formula": "1d20+5", "result": 25 }]
            }"#,
        );
        let app = App::from_config(EngineConfig::default());
        let output = run(&app, &Command::Derive(file.path().to_path_buf()))
            .await
            .expect("derive");

        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json["armorClassTotal"], 13);
        assert_eq!(json["healthBandToken"], "fantasy-caution");
    }

    #[tokio::test]
    async fn rolls_renders_each_roll_and_tally() {
        let file = write_temp(
            r#"[
                { "formula": "1d20", "result": 20 },
                { "formula": "1d20+4", "result": 1 },
                { "formula": "2d6", "result": 12 }
            ]"#,
        );
        let app = App::from_config(EngineConfig::default());
        let output = run(&app, &Command::Rolls(file.path().to_path_buf()))
            .await
            .expect("rolls");

        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json["rolls"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["tally"]["naturalMax"], 1);
        assert_eq!(json["tally"]["naturalMin"], 1);
    }

    #[tokio::test]
    async fn rolls_reports_every_record_past_the_history_limit() {
        let file = write_temp(
            r#"[
                { "formula": "1d20", "result": 20 },
                { "formula": "1d20", "result": 20 },
                { "formula": "1d20", "result": 20 },
                { "formula": "1d20", "result": 20 },
                { "formula": "1d20", "result": 20 }
            ]"#,
        );
        let config = EngineConfig {
            roll_history_limit: 2,
            ..EngineConfig::default()
        };
        let app = App::from_config(config);
        let output = run(&app, &Command::Rolls(file.path().to_path_buf()))
            .await
            .expect("rolls");

        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json["rolls"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["tally"]["naturalMax"], 5);
        assert_eq!(json["tally"]["naturalMin"], 0);
    }
}
