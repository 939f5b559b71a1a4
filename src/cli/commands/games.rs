//! Games command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{GamesArgs, OutputFormat};
use crate::games::{self, GameSpec};
use serde_json::json;

fn game_entry(game: &GameSpec) -> serde_json::Value {
    json!({
        "name": game.name,
        "env_id": game.env_id,
        "aliases": game.aliases,
        "description": game.description,
        "version": game.version,
        "score_range": [game.score_range.0, game.score_range.1],
        "success_threshold": game.success_threshold,
    })
}

/// One line per registered game
pub fn format_game_table() -> String {
    games::registry()
        .iter()
        .map(|g| {
            format!(
                "  {:<16} {:<22} score {} to {}",
                g.name, g.env_id, g.score_range.0, g.score_range.1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_games(args: GamesArgs, level: LogLevel) -> Result<(), String> {
    let entries: Vec<_> = games::registry().iter().map(game_entry).collect();

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Supported games:");
            log(level, LogLevel::Normal, &format_game_table());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&entries)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_table_lists_registry() {
        let table = format_game_table();
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("ALE/SpaceInvaders-v5"));
    }

    #[test]
    fn test_game_entry_fields() {
        let pong = games::find_game("pong").expect("registered");
        let entry = game_entry(pong);
        assert_eq!(entry["env_id"], "ALE/Pong-v5");
        assert_eq!(entry["score_range"][0], -21.0);
        assert_eq!(entry["aliases"][0], "PongNoFrameskip-v4");
    }
}
