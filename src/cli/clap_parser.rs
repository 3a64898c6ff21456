use crate::config::{AppConfig, BatchConfig};
use crate::error::ConfigError;
use crate::models::ColumnMapping;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "handle_matcher",
    version,
    about = "Check whether email handles encode a person's name",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Optional .env file loaded before reading environment fallbacks
    #[arg(long = "env-file", value_name = "PATH", global = true)]
    pub env_file: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a single email against a first and last name
    Check(CheckArgs),
    /// Match every row of a CSV file and write the results
    Batch(BatchArgs),
    /// Write a .env.template with the supported variables
    EnvTemplate {
        #[arg(value_name = "PATH", default_value = ".env.template")]
        path: String,
    },
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(value_name = "EMAIL")]
    pub email: String,
    #[arg(value_name = "FIRST_NAME")]
    pub first_name: String,
    #[arg(value_name = "LAST_NAME")]
    pub last_name: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV with a header row (env: HANDLE_MATCHER_INPUT)
    #[arg(value_name = "INPUT", env = "HANDLE_MATCHER_INPUT")]
    pub input: String,
    /// Output CSV path (env: HANDLE_MATCHER_OUT)
    #[arg(value_name = "OUT_PATH", env = "HANDLE_MATCHER_OUT")]
    pub out_path: String,
    /// Optional key/value summary CSV (env: HANDLE_MATCHER_SUMMARY)
    #[arg(long = "summary", value_name = "PATH", env = "HANDLE_MATCHER_SUMMARY")]
    pub summary: Option<String>,
    /// Id column; pass an empty string to disable ids
    #[arg(long = "id-col", value_name = "COLUMN", default_value = "id")]
    pub id_col: String,
    #[arg(long = "email-col", value_name = "COLUMN", default_value = "email")]
    pub email_col: String,
    #[arg(long = "first-col", value_name = "COLUMN", default_value = "first_name")]
    pub first_col: String,
    #[arg(long = "last-col", value_name = "COLUMN", default_value = "last_name")]
    pub last_col: String,
    /// Worker threads (env: HANDLE_MATCHER_THREADS)
    #[arg(long = "threads", value_name = "N", env = "HANDLE_MATCHER_THREADS")]
    pub threads: Option<usize>,
}

impl BatchArgs {
    pub fn to_app_config(&self) -> Result<AppConfig, ConfigError> {
        let cfg = AppConfig {
            batch: BatchConfig {
                input_path: self.input.clone(),
                out_path: self.out_path.clone(),
                summary_path: self.summary.clone(),
                threads: self.threads,
            },
            columns: ColumnMapping {
                id: Some(self.id_col.clone()).filter(|c| !c.is_empty()),
                email: self.email_col.clone(),
                first_name: self.first_col.clone(),
                last_name: self.last_col.clone(),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check() {
        let cli = Cli::try_parse_from(["handle_matcher", "check", "js@email.com", "john", "smith"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.email, "js@email.com");
                assert_eq!(args.last_name, "smith");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn batch_args_to_config() {
        let cli = Cli::try_parse_from([
            "handle_matcher",
            "batch",
            "in.csv",
            "out.csv",
            "--id-col",
            "",
            "--email-col",
            "mail",
            "--threads",
            "4",
        ])
        .unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        let cfg = args.to_app_config().unwrap();
        assert_eq!(cfg.batch.threads, Some(4));
        assert_eq!(cfg.columns.id, None);
        assert_eq!(cfg.columns.email, "mail");
        assert_eq!(cfg.columns.first_name, "first_name");
    }

    #[test]
    fn batch_args_validation_surfaces() {
        let cli = Cli::try_parse_from(["handle_matcher", "batch", "same.csv", "same.csv"]).unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        assert!(matches!(
            args.to_app_config(),
            Err(ConfigError::InvalidValue { field: "batch.out_path", .. })
        ));
    }

    #[test]
    fn env_template_default_path() {
        let cli = Cli::try_parse_from(["handle_matcher", "env-template"]).unwrap();
        assert!(matches!(cli.command, Command::EnvTemplate { ref path } if path == ".env.template"));
    }
}
