//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{config_path, save_config, InitArgs};
use crate::games::{self, GameSpec};

/// Resolve a game by short name or environment id
pub fn resolve_game(name: &str) -> Result<&'static GameSpec, String> {
    games::find_game(name)
        .or_else(|| games::find_by_env(name))
        .ok_or_else(|| {
            let known: Vec<&str> = games::registry().iter().map(|g| g.name).collect();
            format!("Unknown game: {name}. Supported games: {}", known.join(", "))
        })
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let game = resolve_game(&args.game)?;
    let path = config_path(&args.models_dir, game.name);

    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let config = game.default_config();
    save_config(&config, &path).map_err(|e| format!("Failed to write config: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {} defaults to {}", game.name, path.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Environment: {}", config.env_id()),
    );

    Ok(())
}
