//! # Schema Generator
//!
//! Generates JSON Schema documents for the resource models from their Rust
//! type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Print every resource schema to stdout
//! cargo run --bin schemagen
//!
//! # Print one schema
//! schemagen --resource collaboration
//!
//! # Write one file per resource type
//! schemagen --output-dir schemas/
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cleanrooms_handlers::config::HandlerConfig;
use cleanrooms_handlers::observability;
use cleanrooms_handlers::resources::{
    AnalysisTemplate, Collaboration, ConfiguredTable, ConfiguredTableAssociation, Membership,
    ResourceModel,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Clean Rooms resource schema generator
#[derive(Parser)]
#[command(name = "schemagen", about = "Emit JSON schemas for the resource models", long_about = None)]
struct Cli {
    /// Resource type to emit (all types when omitted)
    #[arg(short, long, value_enum)]
    resource: Option<ResourceKind>,

    /// Write `<type-name>.json` files here instead of printing
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Compact single-line output
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResourceKind {
    #[value(name = "analysis-template")]
    AnalysisTemplate,
    Collaboration,
    #[value(name = "configured-table")]
    ConfiguredTable,
    #[value(name = "configured-table-association")]
    ConfiguredTableAssociation,
    Membership,
}

impl ResourceKind {
    const ALL: [ResourceKind; 5] = [
        ResourceKind::AnalysisTemplate,
        ResourceKind::Collaboration,
        ResourceKind::ConfiguredTable,
        ResourceKind::ConfiguredTableAssociation,
        ResourceKind::Membership,
    ];

    fn schema(self) -> Result<(&'static str, Value)> {
        match self {
            ResourceKind::AnalysisTemplate => schema_of::<AnalysisTemplate>(),
            ResourceKind::Collaboration => schema_of::<Collaboration>(),
            ResourceKind::ConfiguredTable => schema_of::<ConfiguredTable>(),
            ResourceKind::ConfiguredTableAssociation => schema_of::<ConfiguredTableAssociation>(),
            ResourceKind::Membership => schema_of::<Membership>(),
        }
    }
}

fn schema_of<M: ResourceModel>() -> Result<(&'static str, Value)> {
    let schema = schemars::schema_for!(M);
    let mut value = serde_json::to_value(&schema)
        .with_context(|| format!("Failed to serialize schema for {}", M::TYPE_NAME))?;
    if let Value::Object(map) = &mut value {
        map.insert("typeName".to_string(), Value::String(M::TYPE_NAME.to_string()));
    }
    Ok((M::TYPE_NAME, value))
}

/// `AWS::CleanRooms::Collaboration` -> `aws-cleanrooms-collaboration.json`
fn file_name(type_name: &str) -> String {
    format!("{}.json", type_name.replace("::", "-").to_lowercase())
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    text.context("Failed to render schema")
}

fn main() -> Result<()> {
    observability::init(&HandlerConfig::from_env())?;

    let cli = Cli::parse();
    let kinds = cli
        .resource
        .map_or_else(|| ResourceKind::ALL.to_vec(), |kind| vec![kind]);

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    for kind in kinds {
        let (type_name, schema) = kind.schema()?;
        let text = render(&schema, cli.compact)?;

        match &cli.output_dir {
            Some(dir) => {
                let path = dir.join(file_name(type_name));
                std::fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(resource_type = type_name, path = %path.display(), "Wrote schema");
            }
            None => println!("{text}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("AWS::CleanRooms::ConfiguredTableAssociation"),
            "aws-cleanrooms-configuredtableassociation.json"
        );
    }

    #[test]
    fn test_every_schema_carries_type_name() {
        for kind in ResourceKind::ALL {
            let (type_name, schema) = kind.schema().unwrap();
            assert_eq!(schema["typeName"], Value::String(type_name.to_string()));
            assert!(schema.get("properties").is_some(), "{type_name} has no properties");
        }
    }
}
