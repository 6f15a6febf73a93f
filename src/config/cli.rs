use crate::config::Overrides;
use crate::core::orders::StatusFilter;
use crate::domain::model::OrderStatus;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "laamsa-admin")]
#[command(about = "Admin client for the Laamsa order API")]
pub struct CliConfig {
    /// Base URL of the order API
    #[arg(long, env = "LAAMSA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "LAAMSA_CONFIG", global = true)]
    pub config: Option<String>,

    /// Where the session token is stored
    #[arg(long, global = true)]
    pub session_file: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Authenticate and store the session token
    Login {
        #[arg(short, long, env = "LAAMSA_USERNAME")]
        username: Option<String>,
        /// Read from stdin when omitted
        #[arg(short, long, env = "LAAMSA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List orders
    List {
        /// EN_ATTENTE, CONFIRMEE, LIVREE, ANNULEE or all
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
        /// Match name, phone, commune, wilaya or id
        #[arg(short = 'q', long)]
        search: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Order counts per status
    Stats,
    /// Show one order with its social links
    Show {
        id: i64,
        /// Print the HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Change the status of an order
    SetStatus { id: i64, status: OrderStatus },
    /// Delete an order
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            timeout_seconds: self.timeout_secs,
            session_file: self.session_file.clone(),
            verbose: self.verbose,
            log_json: self.log_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_command() {
        let cli = CliConfig::try_parse_from([
            "laamsa-admin",
            "list",
            "--status",
            "confirmee",
            "-q",
            "alger",
            "--format",
            "csv",
        ])
        .unwrap();

        match cli.command {
            Command::List {
                status,
                search,
                format,
            } => {
                assert_eq!(status, StatusFilter::Only(OrderStatus::Confirmee));
                assert_eq!(search.as_deref(), Some("alger"));
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from([
            "laamsa-admin",
            "show",
            "42",
            "--html",
            "--api-url",
            "http://localhost:3000",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(
            cli.overrides().api_url.as_deref(),
            Some("http://localhost:3000")
        );
        assert!(matches!(cli.command, Command::Show { id: 42, html: true }));
    }

    #[test]
    fn test_rejects_unknown_status() {
        assert!(CliConfig::try_parse_from(["laamsa-admin", "set-status", "3", "SHIPPED"]).is_err());
        let cli = CliConfig::try_parse_from(["laamsa-admin", "set-status", "3", "livree"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SetStatus {
                id: 3,
                status: OrderStatus::Livree
            }
        ));
    }
}
