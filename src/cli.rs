//! Command-line interface for city-hunt.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use city_hunt::core::{ConfigError, GameConfig};
use city_hunt::dataset::ValidationPolicy;

/// City Hunt - guess the city by elimination
#[derive(Parser, Debug)]
#[command(name = "city-hunt")]
#[command(about = "Narrow a world city down by answering questions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Dataset JSON file (defaults to the built-in dataset)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep cities with missing or mistyped attributes
        #[arg(long)]
        permissive: bool,
    },

    /// Play scripted games and print transcripts and statistics
    Auto {
        /// Dataset JSON file (defaults to the built-in dataset)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep cities with missing or mistyped attributes
        #[arg(long)]
        permissive: bool,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// RNG seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Fixed target city key (random per game if omitted)
        #[arg(long)]
        target: Option<String>,

        /// Answer at random instead of truthfully
        #[arg(long)]
        random_answers: bool,
    },

    /// List every issue the strict policy would reject, whatever the configured policy
    Validate {
        /// Dataset JSON file (defaults to the built-in dataset)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// TOML config file, read for its dataset path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Session config: the file (or defaults), then flag overrides.
pub fn resolve_config(
    config: Option<&Path>,
    dataset: Option<PathBuf>,
    permissive: bool,
) -> Result<GameConfig, ConfigError> {
    let mut resolved = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(dataset) = dataset {
        resolved = resolved.with_dataset(dataset);
    }
    if permissive {
        resolved = resolved.with_policy(ValidationPolicy::Permissive);
    }
    resolved.validate()?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["city-hunt", "play", "--permissive", "-c", "game.toml"]).unwrap();
        match cli.command {
            Command::Play {
                dataset,
                config,
                permissive,
            } => {
                assert!(dataset.is_none());
                assert_eq!(config, Some(PathBuf::from("game.toml")));
                assert!(permissive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_auto_defaults() {
        let cli = Cli::try_parse_from(["city-hunt", "auto", "--target", "lisbon"]).unwrap();
        match cli.command {
            Command::Auto {
                games,
                seed,
                target,
                random_answers,
                ..
            } => {
                assert_eq!(games, 10);
                assert_eq!(seed, 0);
                assert_eq!(target.as_deref(), Some("lisbon"));
                assert!(!random_answers);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_auto_with_config() {
        let cli = Cli::try_parse_from(["city-hunt", "auto", "-c", "game.toml", "--permissive"]).unwrap();
        match cli.command {
            Command::Auto {
                config, permissive, ..
            } => {
                assert_eq!(config, Some(PathBuf::from("game.toml")));
                assert!(permissive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let path = std::env::temp_dir().join(format!("city_hunt_cli_{}.toml", std::process::id()));
        std::fs::write(&path, "dataset = \"from_file.json\"\npolicy = \"strict\"\n").unwrap();

        let from_file = resolve_config(Some(&path), None, false).unwrap();
        assert_eq!(from_file.dataset, Some(PathBuf::from("from_file.json")));
        assert_eq!(from_file.policy, ValidationPolicy::Strict);

        let overridden = resolve_config(Some(&path), Some("flag.json".into()), true).unwrap();
        assert_eq!(overridden.dataset, Some(PathBuf::from("flag.json")));
        assert_eq!(overridden.policy, ValidationPolicy::Permissive);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(None, None, false).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["city-hunt"]).is_err());
    }
}
