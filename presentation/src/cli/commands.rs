//! CLI command definitions

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for munch
#[derive(Parser, Debug)]
#[command(name = "munch")]
#[command(author, version, about = "Group restaurant picking game server")]
#[command(long_about = r#"
Munch hosts a game where a group of friends votes on nearby restaurants
until they agree on one.

One player creates a game from a search (POST /newGame) and shares the
join code. Everyone connects to /ws?joinCode=<code>, joins, and votes yes
or no on each restaurant the server proposes.

Configuration files are loaded from (in priority order):
1. MUNCH_* environment variables (e.g. MUNCH_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./munch.toml        Project-level config
4. ~/.config/munch/config.toml   Global config

Example:
  munch
  munch --port 8080 -v
  YELP_API_KEY=... munch --bind 127.0.0.1
"#)]
pub struct Cli {
    /// Address to listen on (overrides config)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<IpAddr>,

    /// Port to listen on (overrides config)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["munch"]);
        assert!(cli.bind.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_overrides_and_verbosity() {
        let cli = Cli::parse_from(["munch", "--bind", "127.0.0.1", "-p", "8080", "-vv"]);
        assert_eq!(cli.bind, Some(IpAddr::from([127, 0, 0, 1])));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["munch", "--port", "99999"]).is_err());
    }
}
