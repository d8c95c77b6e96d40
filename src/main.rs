// ==========================================
// Reorder Forecast - command line entry point
// ==========================================
// reorder-forecast forecast --inventory inv.xlsx --sales sales.csv
// reorder-forecast po --inventory inv.xlsx --sales sales.csv --po-number PO-1 ...
// ==========================================

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reorder_forecast::api::{export_forecast_csv_file, ForecastApi, ForecastReport, ForecastSource};
use reorder_forecast::app::SessionState;
use reorder_forecast::config::{ConfigManager, ForecastSettings};
use reorder_forecast::domain::{CategoryView, MetricFilter, PurchaseOrder};
use reorder_forecast::logging;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reorder-forecast")]
#[command(author, version, about = "POS export normalization and reorder forecasting")]
struct Cli {
    /// Log as JSON lines instead of plain text
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the reorder forecast and print it
    Forecast {
        #[command(flatten)]
        input: ForecastArgs,

        /// Which rows to show and export
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Write the forecast table as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draft a purchase order from the forecast's reorder quantities
    Po {
        #[command(flatten)]
        input: ForecastArgs,

        #[arg(long)]
        po_number: String,

        #[arg(long)]
        vendor: String,

        #[arg(long)]
        buyer: String,

        /// Payment terms (default: Net 30)
        #[arg(long)]
        terms: Option<String>,

        /// PO date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Write the PO text here instead of stdout (a directory gets PO_<number>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ForecastArgs {
    /// Inventory export (.csv/.xlsx/.xls/.xlsm/.ods)
    #[arg(long)]
    inventory: PathBuf,

    /// Product sales export (.csv/.xlsx/.xls/.xlsm/.ods)
    #[arg(long)]
    sales: PathBuf,

    /// Target days on hand (1-60)
    #[arg(long)]
    threshold: Option<u32>,

    /// Days covered by the sales export (7-90)
    #[arg(long)]
    period_days: Option<u32>,

    /// Velocity multiplier (0.01-5.0)
    #[arg(long)]
    velocity: Option<f64>,

    /// Directory holding settings.json / vocabulary.json / aliases.json
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Watchlist,
    Asap,
}

impl From<FilterArg> for MetricFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => MetricFilter::All,
            FilterArg::Watchlist => MetricFilter::Watchlist,
            FilterArg::Asap => MetricFilter::ReorderAsap,
        }
    }
}

impl ForecastArgs {
    fn config(&self) -> ConfigManager {
        match &self.config_dir {
            Some(dir) => ConfigManager::new(dir),
            None => ConfigManager::from_default_dir(),
        }
    }

    /// File settings, then command line overrides
    fn settings(&self, config: &ConfigManager) -> Result<ForecastSettings> {
        let mut settings = config.load_settings().context("loading settings")?;
        if let Some(threshold) = self.threshold {
            settings.doh_threshold = threshold;
        }
        if let Some(days) = self.period_days {
            settings.sales_period_days = days;
        }
        if let Some(velocity) = self.velocity {
            settings.velocity_adjustment = velocity;
        }
        Ok(settings)
    }

    fn source(&self) -> ForecastSource {
        ForecastSource::Files {
            inventory: self.inventory.clone(),
            sales: self.sales.clone(),
        }
    }

    fn run(&self, filter: MetricFilter) -> Result<SessionState> {
        let config = self.config();
        let api = ForecastApi::from_config(&config).context("loading column aliases / vocabulary")?;

        let mut session = SessionState::new(self.settings(&config)?);
        session.set_metric_filter(filter);
        session
            .recompute(&api, &self.source())
            .context("forecast failed")?;
        Ok(session)
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    if let Err(e) = run(cli) {
        tracing::error!("command failed: {e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Forecast {
            input,
            filter,
            output,
            json,
        } => {
            let session = input.run(filter.into())?;
            let report = session
                .last_report
                .as_ref()
                .context("forecast produced no report")?;

            if json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                print_summary(report);
                print_views(&session.visible_views());
            }

            if let Some(path) = output {
                export_forecast_csv_file(&session.visible_rows(), &path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Commands::Po {
            input,
            po_number,
            vendor,
            buyer,
            terms,
            date,
            output,
        } => {
            let session = input.run(MetricFilter::All)?;
            let report = session
                .last_report
                .as_ref()
                .context("forecast produced no report")?;

            let po_date = date.unwrap_or_else(|| Utc::now().date_naive());
            let mut po = PurchaseOrder::new(po_number, po_date, vendor, buyer);
            if let Some(terms) = terms {
                po = po.with_terms(terms);
            }
            po.seed_from_forecast(&report.rows);

            let text = po.render_text();
            match output {
                Some(path) => {
                    let path = if path.is_dir() { path.join(po.file_name()) } else { path };
                    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(path = %path.display(), lines = po.lines.len(), "purchase order written");
                }
                None => print!("{text}"),
            }
        }
    }
    Ok(())
}

fn print_summary(report: &ForecastReport) {
    let summary = &report.summary;
    println!("Inventory sheet: {} (header {})", report.inventory_sheet, report.inventory_header);
    println!("Sales sheet:     {} (header {})", report.sales_sheet, report.sales_header);
    println!();
    println!("Total units sold:  {}", summary.total_units_sold);
    println!("Active categories: {}", summary.active_categories);
    println!("Reorder ASAP:      {}", summary.reorder_asap);
    println!("Watchlist:         {}", summary.watchlist);
    if report.coerced_cells > 0 {
        println!("Quantity cells read as 0: {}", report.coerced_cells);
    }
}

fn print_views(views: &[CategoryView]) {
    for view in views {
        println!();
        println!(
            "{} (avg days on hand: {})",
            view.category.to_uppercase(),
            view.avg_days_on_hand
        );
        println!(
            "  {:<22} {:<10} {:>9} {:>7} {:>9} {:>5} {:>7}  {}",
            "strain", "size", "on hand", "sold", "per day", "doh", "reorder", "priority"
        );
        for row in &view.rows {
            println!(
                "  {:<22} {:<10} {:>9} {:>7} {:>9.3} {:>5} {:>7}  {}",
                row.strain_type,
                row.package_size,
                row.on_hand_units,
                row.units_sold,
                row.avg_units_per_day,
                row.days_on_hand,
                row.reorder_qty,
                row.reorder_priority.label()
            );
        }
    }
}
