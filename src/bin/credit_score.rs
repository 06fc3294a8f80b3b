//! credit-score — assess applicants from the command line.
//!
//! Input comes from a JSON document (`--input FILE`, or `--input -` for
//! stdin), from individual field flags, or both; flags win over the document.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use credit_score::config::{Config, OutputFormat};
use credit_score::model::MODEL_PATH_ENV;
use credit_score::{CreditMix, CreditScorer, ModelSource, RawInput, TextReport};

/// Credit risk assessment
#[derive(Parser)]
#[command(name = "credit-score")]
#[command(version = credit_score::PKG_VERSION, long_version = credit_score::long_version())]
#[command(about = "Credit risk assessment with a pre-trained classifier")]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an applicant and print the assessment
    Assess {
        #[command(flatten)]
        input: InputArgs,
        /// Model artifact (overrides config)
        #[arg(short, long, env = MODEL_PATH_ENV)]
        model: Option<PathBuf>,
        /// Output format: text or json (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Validate an applicant and print the encoded feature vector
    Encode {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the risk classes in severity order
    Classes,
}

#[derive(Args)]
struct InputArgs {
    /// JSON document with applicant fields ("-" reads stdin)
    #[arg(short, long)]
    input: Option<String>,
    /// Age in years (18-100)
    #[arg(long)]
    age: Option<u32>,
    /// Monthly income
    #[arg(long)]
    monthly_income: Option<f64>,
    /// Loan amount
    #[arg(long)]
    loan_amount: Option<f64>,
    /// Number of active loans (0-10)
    #[arg(long)]
    num_loans: Option<u32>,
    /// Credit mix: bad, standard or good
    #[arg(long)]
    credit_mix: Option<CreditMix>,
    /// Outstanding debt
    #[arg(long)]
    outstanding_debt: Option<f64>,
    /// Interest rate in percent (0-100)
    #[arg(long)]
    interest_rate: Option<u32>,
    /// Number of delayed payments (0-50)
    #[arg(long)]
    delayed_payments: Option<u32>,
}

impl InputArgs {
    fn resolve(self) -> Result<RawInput, Box<dyn std::error::Error>> {
        let base = match self.input.as_deref() {
            Some(source) => serde_json::from_str(&read_source(source)?)?,
            None => RawInput::default(),
        };
        let flags = RawInput {
            age: self.age,
            monthly_income: self.monthly_income,
            loan_amount: self.loan_amount,
            num_loans: self.num_loans,
            credit_mix: self.credit_mix.unwrap_or_default(),
            outstanding_debt: self.outstanding_debt,
            interest_rate: self.interest_rate,
            delayed_payments: self.delayed_payments,
        };
        Ok(base.merge(flags))
    }
}

fn read_source(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(Path::new(source))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: warn for CLI; override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Cli::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Assess {
            input,
            model,
            format,
        } => {
            let raw = input.resolve()?;
            let model_path = match model {
                Some(path) => path,
                None => config.model.resolved_path()?,
            };
            let classifier = ModelSource::local(&model_path).load()?;
            let scorer = CreditScorer::builder()
                .classifier(classifier)
                .classes(config.class_order())
                .build()?;
            info!(
                version = credit_score::version_string(),
                model = %model_path.display(),
                "scorer ready"
            );

            let result = scorer.assess(&raw)?;
            match format.unwrap_or(config.report.format) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => print!(
                    "{}",
                    TextReport::new(&result).bar_width(config.report.bar_width)
                ),
            }
        }

        Command::Encode { input } => {
            let raw = input.resolve()?;
            let features = credit_score::encode(&raw)?;
            for (name, value) in features.iter() {
                println!("{name}: {value}");
            }
        }

        Command::Classes => {
            for (i, class) in config.class_order().iter().enumerate() {
                println!(
                    "{}. {} [{}] {}",
                    i + 1,
                    class.name,
                    class.color,
                    class.description
                );
            }
        }
    }

    Ok(())
}
