use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "counter-view", version, about = "Terminal counter with an Increment button")]
pub struct Cli {
    /// Config file to use instead of ~/.config/counter-view/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable mouse capture (keyboard activation only)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Load config from `--config` or the default location, then apply
    /// flag overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if self.no_mouse {
            config.ui.mouse_capture = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_args() {
        let cli = Cli::try_parse_from(["counter-view"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn parses_config_and_no_mouse() {
        let cli =
            Cli::try_parse_from(["counter-view", "--config", "/tmp/c.toml", "--no-mouse"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.no_mouse);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["counter-view", "--start", "5"]).is_err());
    }
}
