//! apiwire CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.
#![deny(unsafe_code)]

use std::collections::HashMap;
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::{Context, bail};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use apiwire::generation::{ApiBuilder, EmissionSink, GeneratorConfig, LogTracking};
use apiwire::infrastructure::swagger::{CompositeSchemaLoader, load_document_or_empty};
use apiwire::infrastructure::JsonSink;

#[derive(Parser)]
#[command(name = "apiwire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a typed client surface from a Swagger/OpenAPI spec
    Generate {
        /// Path or URL to the schema document (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// Component name prefixing the generated interface
        #[arg(long, default_value = "Api")]
        component_name: String,
        /// Target package/namespace for the emission sink
        #[arg(long, default_value = "")]
        package_name: String,
        /// Module name for the emission sink
        #[arg(long, default_value = "")]
        module_name: String,
        /// Header override as `operationId=Header-Name: value`, repeatable
        #[arg(long = "header")]
        headers: Vec<String>,
        /// Write the JSON surface here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            schema_path,
            component_name,
            package_name,
            module_name,
            headers,
            output,
        } => {
            generate(
                &schema_path,
                &component_name,
                &package_name,
                &module_name,
                &headers,
                output,
            )
            .await
        }
    }
}

async fn generate(
    schema_path: &str,
    component_name: &str,
    package_name: &str,
    module_name: &str,
    headers: &[String],
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(package_name, component_name, module_name, schema_path);
    config.header_overrides = parse_header_overrides(headers)?;
    config
        .validate()
        .context("invalid generator configuration")?;

    let tracking = std::sync::Arc::new(LogTracking);
    let loader = CompositeSchemaLoader::new();
    let document = load_document_or_empty(&loader, schema_path, &*tracking).await;

    let surface = ApiBuilder::with_tracking(config.clone(), tracking).build(&document);
    info!(
        methods = surface.interface.methods.len(),
        models = surface.models.len(),
        enums = surface.enums.len(),
        "generation complete"
    );

    JsonSink::new(output)
        .emit(&surface, &config)
        .context("failed to emit generated surface")?;
    Ok(())
}

/// Parse repeated `operationId=Header-Name: value` flags, grouping header
/// lines by operation
fn parse_header_overrides(headers: &[String]) -> anyhow::Result<HashMap<String, Vec<String>>> {
    let mut overrides: HashMap<String, Vec<String>> = HashMap::new();
    for entry in headers {
        let Some((operation, header)) = entry.split_once('=') else {
            bail!("invalid header override (expected operationId=Header): {entry}");
        };
        overrides
            .entry(operation.to_string())
            .or_default()
            .push(header.to_string());
    }
    Ok(overrides)
}
