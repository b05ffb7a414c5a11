use crate::schedule::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "override-delete")]
#[command(version, about = "Confirm and delete an on-call schedule override")]
pub struct Cli {
    /// ID of the override to delete
    pub override_id: String,

    /// Time zone for displayed times ("local" or an IANA name)
    #[arg(long)]
    pub tz: Option<String>,

    /// GraphQL endpoint of the scheduling backend
    #[arg(long)]
    pub api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long)]
    pub token: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(tz) = &self.tz {
            config.time_zone = tz.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override_id_only() {
        let cli = Cli::try_parse_from(["override-delete", "o1"]).unwrap();
        assert_eq!(cli.override_id, "o1");
        assert!(cli.tz.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_override_id_required() {
        assert!(Cli::try_parse_from(["override-delete"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "override-delete",
            "o1",
            "--tz",
            "America/Chicago",
            "--api-url",
            "https://oncall.example.com/api/graphql",
        ])
        .unwrap();

        let mut config = AppConfig {
            token: Some("from-file".to_string()),
            ..AppConfig::default()
        };
        cli.apply_to(&mut config);

        assert_eq!(config.time_zone, "America/Chicago");
        assert_eq!(config.api_url, "https://oncall.example.com/api/graphql");
        assert_eq!(config.token.as_deref(), Some("from-file"));
    }
}
