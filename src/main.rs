//! figtally command line entry point.
//!
//! Loads transactions and customers from JSON, builds the report and prints
//! it as text or JSON. Logs go to stderr; set `RUST_LOG` to change the level.
//!
//! ```bash
//! figtally --transactions transactions.json --customers customers.json
//! figtally --dataset dataset.json --format json --threshold 150
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use figtally::report::{Dataset, Report, ReportConfig};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "figtally", version, about = "Summarize transactions and customers")]
struct Arguments {
    /// JSON file holding both `transactions` and `customers`.
    #[arg(long, conflicts_with_all = ["transactions", "customers"])]
    dataset: Option<PathBuf>,

    /// JSON array of transactions.
    #[arg(long, requires = "customers")]
    transactions: Option<PathBuf>,

    /// JSON array of customers.
    #[arg(long, requires = "transactions")]
    customers: Option<PathBuf>,

    /// Overrides the configured high value threshold.
    #[arg(long)]
    threshold: Option<Decimal>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Loads the selected input files and applies the command line overrides to
/// `config`.
fn prepare(arguments: &Arguments, config: ReportConfig) -> anyhow::Result<(Dataset, ReportConfig)> {
    let config = match arguments.threshold {
        Some(threshold) => config.with_high_value_threshold(threshold),
        None => config,
    };

    let dataset = match (
        &arguments.dataset,
        &arguments.transactions,
        &arguments.customers,
    ) {
        (Some(path), _, _) => Dataset::from_path(path)?,
        (None, Some(transactions), Some(customers)) => {
            Dataset::from_paths(transactions, customers)?
        }
        _ => bail!("either --dataset or both --transactions and --customers are required"),
    };

    Ok((dataset, config))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "figtally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let arguments = Arguments::parse();

    let config = ReportConfig::from_env().context("failed to load report configuration")?;
    let (dataset, config) = prepare(&arguments, config)?;
    tracing::debug!(?config, "configuration loaded");

    let report = Report::build(&dataset, &config);

    match arguments.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use figtally::report::HIGH_VALUE_THRESHOLD_VAR;
    use rstest::rstest;
    use tempfile::TempDir;

    const DATASET: &str = r#"{
        "transactions": [
            { "amount": 300, "product": "FIG_JAM", "customerId": 1 },
            { "amount": 180, "product": "FIG_JELLY", "customerId": 2 }
        ],
        "customers": [
            { "id": 1, "emailAddress": "ada@x.com", "firstName": "Ada", "lastName": "Byron" },
            { "id": 2, "emailAddress": "alan@x.com", "firstName": "Alan", "lastName": "Turing" }
        ]
    }"#;

    fn dataset_file(directory: &TempDir) -> PathBuf {
        let path = directory.path().join("dataset.json");
        std::fs::write(&path, DATASET).unwrap();
        path
    }

    fn configured_threshold(value: &str) -> ReportConfig {
        ReportConfig::from_lookup(|key| (key == HIGH_VALUE_THRESHOLD_VAR).then(|| value.to_string()))
            .unwrap()
    }

    #[rstest]
    #[case(&["figtally", "--dataset", "d.json", "--transactions", "t.json", "--customers", "c.json"])]
    #[case(&["figtally", "--dataset", "d.json", "--customers", "c.json"])]
    fn dataset_conflicts_with_split_inputs(#[case] argv: &[&str]) {
        let error = Arguments::try_parse_from(argv).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[rstest]
    #[case(&["figtally", "--transactions", "t.json"])]
    #[case(&["figtally", "--customers", "c.json"])]
    fn split_inputs_require_each_other(#[case] argv: &[&str]) {
        let error = Arguments::try_parse_from(argv).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[rstest]
    fn parses_split_inputs_with_json_format() {
        let arguments = Arguments::try_parse_from([
            "figtally",
            "--transactions",
            "t.json",
            "--customers",
            "c.json",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(arguments.transactions, Some(PathBuf::from("t.json")));
        assert_eq!(arguments.customers, Some(PathBuf::from("c.json")));
        assert_eq!(arguments.format, OutputFormat::Json);
    }

    #[rstest]
    fn prepare_without_input_fails() {
        let arguments = Arguments::try_parse_from(["figtally"]).unwrap();

        let error = prepare(&arguments, ReportConfig::default()).unwrap_err();

        assert!(error.to_string().contains("either --dataset or both --transactions and --customers"));
    }

    #[rstest]
    fn threshold_flag_overrides_environment() {
        let directory = TempDir::new().unwrap();
        let path = dataset_file(&directory);
        let arguments = Arguments::try_parse_from([
            "figtally",
            "--dataset",
            path.to_str().unwrap(),
            "--threshold",
            "500",
        ])
        .unwrap();

        let (dataset, config) = prepare(&arguments, configured_threshold("150")).unwrap();

        assert_eq!(config.high_value_threshold, Decimal::from(500));
        assert_eq!(dataset.transactions.len(), 2);
    }

    #[rstest]
    fn environment_threshold_kept_without_flag() {
        let directory = TempDir::new().unwrap();
        let path = dataset_file(&directory);
        let arguments =
            Arguments::try_parse_from(["figtally", "--dataset", path.to_str().unwrap()]).unwrap();

        let (dataset, config) = prepare(&arguments, configured_threshold("150")).unwrap();
        let report = Report::build(&dataset, &config);

        assert_eq!(config.high_value_threshold, Decimal::from(150));
        assert_eq!(report.most_recent_over_threshold, Some(Decimal::from(180)));
    }

    #[rstest]
    fn prepare_reports_missing_file() {
        let directory = TempDir::new().unwrap();
        let missing = directory.path().join("missing.json");
        let arguments =
            Arguments::try_parse_from(["figtally", "--dataset", missing.to_str().unwrap()])
                .unwrap();

        assert!(prepare(&arguments, ReportConfig::default()).is_err());
    }
}
