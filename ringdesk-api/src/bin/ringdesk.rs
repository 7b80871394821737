use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared_types::{
    CarrierGroup, ContactFilter, ContactPriority, ContactStatus, ExtractionError, ImportCsvRequest,
    SortOrder,
};
use std::path::PathBuf;

use ringdesk_api::config::ApiConfig;
use ringdesk_api::database::{batches as batches_db, contacts as contacts_db};
use ringdesk_api::helpers::{self, contact_filter};
use ringdesk_api::jobs::import_manager::ImportManager;

#[derive(Parser, Debug)]
#[command(name = "ringdesk", about = "Import, export and inspect ring lists from the command line")]
struct Cli {
    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a business-registry CSV export as a new batch
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Batch name; defaults to the file name
        #[arg(long)]
        name: Option<String>,
    },
    /// Write contacts matching the filter to a CSV file
    Export {
        #[arg(value_name = "OUT")]
        out: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Manage import batches
    Batches {
        #[command(subcommand)]
        command: BatchCommand,
    },
    /// Print contact statistics
    Stats,
}

#[derive(Subcommand, Debug)]
enum BatchCommand {
    List,
    /// Delete a batch and all of its contacts
    Delete { id: i64 },
}

#[derive(clap::Args, Debug)]
struct FilterArgs {
    #[arg(long)]
    search: Option<String>,

    /// telia, tele2, tre, telenor or other
    #[arg(long, value_parser = parse_carrier_group)]
    operator: Option<CarrierGroup>,

    #[arg(long, value_parser = parse_status)]
    status: Option<ContactStatus>,

    #[arg(long, value_parser = parse_priority)]
    priority: Option<ContactPriority>,

    /// name-asc, name-desc, phones-desc, phones-asc or recent
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortOrder>,
}

impl From<FilterArgs> for ContactFilter {
    fn from(args: FilterArgs) -> Self {
        ContactFilter {
            search: args.search,
            operator: args.operator,
            status: args.status,
            priority: args.priority,
            sort: args.sort,
        }
    }
}

fn parse_status(value: &str) -> Result<ContactStatus, String> {
    value.parse()
}

fn parse_priority(value: &str) -> Result<ContactPriority, String> {
    value.parse()
}

/// Same spelling as the HTTP query parameters
fn parse_carrier_group(value: &str) -> Result<CarrierGroup, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("Unknown operator group: {}", value))
}

fn parse_sort(value: &str) -> Result<SortOrder, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("Unknown sort order: {}", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    helpers::logging::init_tracing(cli.log_file_path.as_deref(), "ringdesk.log");

    let (config, _) = ApiConfig::load().context("Failed to load ringdesk config")?;
    let db = helpers::database::initialize_database(&config)?;
    let conn = db.async_connection.clone();

    match cli.command {
        Command::Import { file, name } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let content = String::from_utf8(bytes).map_err(|e| {
                ExtractionError::ParseError(format!("{} is not UTF-8: {}", file.display(), e))
            })?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            let manager = ImportManager::new(conn, config.insert_chunk_size());
            let response = manager
                .import_csv(&ImportCsvRequest {
                    file_name,
                    name,
                    content,
                })
                .await?;

            println!(
                "Imported {} contacts into batch {} \"{}\" ({} rows skipped)",
                response.imported,
                response.batch.id,
                response.batch.name,
                response.skipped.len()
            );
            for skipped in &response.skipped {
                println!(
                    "  row {}: {} ({})",
                    skipped.row_number,
                    skipped.name,
                    skipped.reason.describe()
                );
            }
        }
        Command::Export { out, filter } => {
            let filter = ContactFilter::from(filter);
            let contacts = contact_filter::apply_filter(contacts_db::list_contacts(conn).await?, &filter);
            let csv = extractors::export_contacts_csv(&contacts)?;

            std::fs::write(&out, csv)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Exported {} contacts to {}", contacts.len(), out.display());
        }
        Command::Batches { command: BatchCommand::List } => {
            for batch in batches_db::list_batches(conn).await? {
                let created = chrono::DateTime::from_timestamp(batch.created_at, 0)
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "{:>5}  {:<30}  {:>6} rows  {}  {}",
                    batch.id, batch.name, batch.count, created, batch.file_name
                );
            }
        }
        Command::Batches {
            command: BatchCommand::Delete { id },
        } => {
            if batches_db::delete_batch(conn, id).await? {
                println!("Deleted batch {} and its contacts", id);
            } else {
                anyhow::bail!("Batch {} not found", id);
            }
        }
        Command::Stats => {
            let stats = contact_filter::compute_stats(&contacts_db::list_contacts(conn).await?);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
