use clap::Parser;
use std::path::PathBuf;

/// Runtime settings, read from the command line with environment fallbacks.
///
/// Values from a `.env` file apply as long as it is loaded before parsing.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "email-verifier")]
#[command(version)]
#[command(about = "Email syntax validation with a host blacklist", long_about = None)]
pub struct Configuration {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// File with one blacklisted host per line
    #[arg(short, long, env = "BLACKLIST_PATH", default_value = "blacklist.txt")]
    pub blacklist: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_flags() {
        let config = Configuration::try_parse_from([
            "email-verifier",
            "--port",
            "8081",
            "--host",
            "0.0.0.0",
            "--blacklist",
            "/etc/blacklist.txt",
        ])
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.blacklist, PathBuf::from("/etc/blacklist.txt"));
    }

    #[test]
    fn test_short_flags() {
        let config =
            Configuration::try_parse_from(["email-verifier", "-p", "9000", "-b", "hosts.txt"])
                .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.blacklist, PathBuf::from("hosts.txt"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Configuration::try_parse_from(["email-verifier", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Configuration::command().debug_assert();
    }
}
