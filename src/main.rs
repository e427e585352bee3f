use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use loan_intake::client::{HttpLoanClient, LoanGateway};
use loan_intake::config::Config;
use loan_intake::lender;
use loan_intake::portal::{self, BankLink, PlaidClient};
use loan_intake::server::logging;
use loan_intake::ui::form::{FieldId, FormState};
use loan_intake::ui::runtime;
use loan_intake::ui::session::LoanFormSession;

#[derive(Parser)]
#[command(name = "loan-intake", version, about = "Loan intake form and backend services")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in and submit a loan in the terminal
    Form,
    /// Run the lender service
    Lender,
    /// Run the borrower portal service
    Portal,
    /// Submit one loan without the interactive form
    Submit {
        /// Start from a JSON document shaped like the form
        #[arg(long)]
        file: Option<PathBuf>,

        /// Set a field, e.g. --set borrower.phoneNumber=5551234567
        #[arg(long = "set", value_name = "SECTION.FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(FieldId, String)>,
    },
}

fn parse_assignment(arg: &str) -> Result<(FieldId, String), String> {
    let (path, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected SECTION.FIELD=VALUE, got '{}'", arg))?;
    let field = path.parse::<FieldId>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Command::Form => {
            // stderr belongs to the terminal UI.
            logging::init_file_tracing();
            let gateway: Arc<dyn LoanGateway> = Arc::new(HttpLoanClient::new(&config.client)?);
            runtime::run(rt.handle().clone(), gateway, config.form.currency_mask())?;
        }
        Command::Lender => {
            logging::init_tracing();
            let repository = lender::repository_from_config(&config.lender)?;
            rt.block_on(lender::serve(&config.lender, repository))?;
        }
        Command::Portal => {
            logging::init_tracing();
            let bank_link: Arc<dyn BankLink> = Arc::new(PlaidClient::new(&config.bank_link)?);
            rt.block_on(portal::serve(&config.portal, bank_link))?;
        }
        Command::Submit { file, set } => {
            logging::init_tracing();
            let mut session = LoanFormSession::new(config.form.currency_mask());
            if let Some(path) = file {
                let loaded = read_form(&path)?;
                for field in FieldId::ALL {
                    session.input(field, field.get(&loaded));
                }
            }
            for (field, value) in set {
                let stored = session.input(field, &value);
                if stored != value {
                    tracing::info!(%field, %stored, "Value normalized by input mask");
                }
            }

            let client = HttpLoanClient::new(&config.client)?;
            let notice = rt.block_on(session.submit(&client));
            match notice {
                Some(notice) if notice.is_success() => println!("{}", notice),
                Some(notice) => bail!("{}", notice),
                None => bail!("Submission did not start"),
            }
        }
    }

    Ok(())
}

fn read_form(path: &Path) -> Result<FormState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
