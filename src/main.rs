use agromarket::application::checkout::CheckoutSession;
use agromarket::config::CheckoutConfig;
use agromarket::domain::catalog::Catalog;
use agromarket::domain::money::Money;
use agromarket::infrastructure::in_memory::{ConfirmationLog, LatestSummary};
use agromarket::infrastructure::log_observer::TracingObserver;
use agromarket::interfaces::csv::event_reader::EventReader;
use agromarket::interfaces::csv::receipt_writer::ReceiptWriter;
use agromarket::interfaces::text::{ConfirmationView, SummaryView, render_catalog};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Text,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkout events CSV file (action, target, value)
    input: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(long)]
    catalog: bool,

    /// Output format for confirmed orders
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Only allow submitting when every field passes validation
    #[arg(long)]
    strict: bool,

    /// Let out-of-stock items be added to the cart
    #[arg(long)]
    allow_unavailable: bool,

    /// Maximum quantity of a single item
    #[arg(long)]
    max_quantity: Option<u32>,

    /// Subtotal above which delivery is free
    #[arg(long, default_value = "5000")]
    free_shipping_threshold: Decimal,

    /// Delivery fee at or below the threshold
    #[arg(long, default_value = "500")]
    shipping_fee: Decimal,
}

impl Cli {
    fn config(&self) -> CheckoutConfig {
        CheckoutConfig {
            free_shipping_threshold: Money::new(self.free_shipping_threshold),
            shipping_fee: Money::new(self.shipping_fee),
            max_quantity: self.max_quantity,
            enforce_availability: !self.allow_unavailable,
            strict_validation: self.strict,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = CheckoutSession::new(Catalog::standard(), cli.config());

    if cli.catalog {
        print!("{}", render_catalog(session.catalog(), session.selection()));
        return Ok(());
    }

    let input = cli
        .input
        .as_ref()
        .ok_or_else(|| miette!("an input events file is required unless --catalog is given"))?;

    let log = ConfirmationLog::new();
    let latest = LatestSummary::new();
    session.subscribe(log.clone());
    session.subscribe(latest.clone());
    session.subscribe(TracingObserver);

    // Process events
    let file = File::open(input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = session.apply(event) {
                    eprintln!("Error processing event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let pending = latest.get().filter(|summary| !summary.is_empty());
    if let Some(pending) = &pending {
        warn!(
            lines = pending.lines.len(),
            total = %pending.totals.total,
            "input ended with an unsubmitted cart"
        );
    }

    // Output confirmed orders
    let confirmations = log.drain();
    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = ReceiptWriter::new(stdout.lock());
            writer.write_receipts(&confirmations).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &confirmations).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        OutputFormat::Text => {
            let mut out = stdout.lock();
            for confirmation in &confirmations {
                writeln!(out, "{}", ConfirmationView(confirmation)).into_diagnostic()?;
            }
            // The cart left open at the end of input, with the amount due
            if let Some(summary) = &pending {
                let view = SummaryView {
                    summary,
                    config: session.config(),
                };
                write!(out, "{view}").into_diagnostic()?;
            }
        }
    }

    Ok(())
}
