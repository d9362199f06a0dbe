//! Command-line frontend for sortera: resolve item labels into disposal
//! guidance, search facility directories, and scan images through the
//! external vision backends.

#![expect(
    clippy::print_stdout,
    reason = "command output is the whole point of this binary"
)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use sortera_core::{
    FacilityRecord, FacilityType, GuidanceResolver, Region, SearchFilters, SearchQuery,
    model::DirectoryId, plugin::DirectoryRegistry, service::SorteraService,
};
use sortera_provider_california as california;
use sortera_provider_vision::{VisionClassifierPort, VisionDetectorPort};

#[derive(Parser)]
#[command(name = "sortera")]
#[command(about = "Disposal guidance and recycling facility search")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a free-text item label into disposal guidance
    Resolve {
        /// Item label, e.g. "plastic bottle"
        label: String,
    },

    /// Search the facility directory
    Search {
        /// Free-text search term
        term: Option<String>,

        /// Exact 5-digit zip code constraint
        #[arg(short, long)]
        zip: Option<String>,

        /// Facility type (recycling, hazardous, electronic, composting)
        #[arg(short = 't', long = "type")]
        facility_type: Option<FacilityType>,

        /// Region (northern, southern)
        #[arg(short, long)]
        region: Option<Region>,

        /// Material the facility must accept; repeat for several
        #[arg(short, long = "material")]
        materials: Vec<String>,

        /// Directory to search (see `sortera directories`)
        #[arg(short, long, default_value = "california")]
        directory: String,

        /// Remote directory base URL (bundled records when omitted)
        #[arg(long)]
        directory_url: Option<String>,
    },

    /// Identify the item in an image and resolve its guidance
    Scan {
        /// Path to an encoded image file
        image: PathBuf,

        /// Base URL of the vision inference backend
        #[arg(long)]
        vision_url: String,
    },

    /// List the built-in guidance catalog
    Catalog,

    /// List the available facility directories
    Directories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Resolve { label } => {
            let service = build_service(None)?;
            print_guidance(&label, &service.resolve(&label));
        }
        Commands::Search {
            term,
            zip,
            facility_type,
            region,
            materials,
            directory,
            directory_url,
        } => {
            let service = build_service(directory_url)?;
            let query = SearchQuery {
                term: term.unwrap_or_default(),
                zip_code: zip,
                filters: SearchFilters {
                    facility_type,
                    region,
                    required_materials: materials,
                },
            };

            let ranked = service
                .search_facilities(&DirectoryId(directory), &query)
                .await
                .context("facility search failed")?;

            if ranked.is_empty() {
                println!("No facilities matched.");
            }
            for facility in &ranked {
                print_facility(facility);
            }
        }
        Commands::Scan { image, vision_url } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read image {}", image.display()))?;

            let client = http_client()?;
            let detector = VisionDetectorPort::new(client.clone(), vision_url.clone());
            let classifier = VisionClassifierPort::new(client, vision_url);

            let service = build_service(None)?;
            let report = service
                .scan(&detector, &classifier, &bytes)
                .await
                .context("scan failed")?;

            println!(
                "Identified: {} (score {:.2}) at {}",
                report.label,
                report.detection_score,
                report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            );
            print_guidance(&report.label, &report.guidance);
        }
        Commands::Catalog => {
            let resolver = GuidanceResolver::builtin();
            for entry in resolver.catalog().iter() {
                let marker = if entry.recyclable { "yes" } else { "no" };
                println!(
                    "{:<20} {:<12} recyclable: {:<4} {}",
                    entry.key, entry.category, marker, entry.instructions
                );
            }
        }
        Commands::Directories => {
            let service = build_service(None)?;
            for (id, name) in service.directories() {
                println!("{:<14} {name}", id.0);
            }
        }
    }

    Ok(())
}

fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent("sortera/0.1")
        .build()
        .context("failed to build HTTP client")
}

fn build_service(directory_url: Option<String>) -> Result<SorteraService> {
    let plugin = match directory_url {
        Some(base_url) => california::plugin(http_client()?, base_url),
        None => california::offline_plugin(),
    };
    let registry = Arc::new(DirectoryRegistry::new(vec![plugin]));
    Ok(SorteraService::new(GuidanceResolver::builtin(), registry))
}

fn print_guidance(label: &str, guidance: &sortera_core::GuidanceResult) {
    let verdict = if guidance.recyclable {
        "recyclable"
    } else {
        "not recyclable"
    };
    println!("{label}: {verdict} ({})", guidance.category);
    println!("  confidence:   {:.2}", guidance.confidence);
    println!("  instructions: {}", guidance.instructions);
}

fn print_facility(facility: &FacilityRecord) {
    println!(
        "{} - {}, {}, {} {}",
        facility.name, facility.address, facility.city, facility.state, facility.zip_code
    );
    println!(
        "  {} / {} | accepts: {}",
        facility.facility_type,
        facility.region,
        facility.accepted_materials.join(", ")
    );
    if let Some(phone) = &facility.phone {
        println!("  phone: {phone}");
    }
    if let Some(hours) = &facility.hours {
        println!("  hours: {hours}");
    }
    if let Some(notes) = &facility.notes {
        println!("  note:  {notes}");
    }
}
