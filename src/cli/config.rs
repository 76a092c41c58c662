use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::extract::extractor::ExtractConfig;
use crate::scan::scanner::ScannerConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "template-fields",
    version,
    about = "Extract form field metadata from Angular/Kendo component templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config file (default: template-fields.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory of templates and export every field as JSON
    Scan {
        /// Directory to scan
        #[arg(long)]
        root: Option<String>,

        /// Template file extension
        #[arg(long = "ext")]
        extension: Option<String>,

        /// Output file, or - for stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Maximum directory depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Extract the fields of a single template and print them as JSON
    Extract {
        /// Template file
        #[arg(long)]
        file: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `template-fields.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub max_depth: Option<usize>,

    #[serde(default = "default_true")]
    pub skip_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            max_depth: None,
            skip_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            pretty: false,
        }
    }
}

// Serde default helpers
fn default_root() -> String { "app".to_string() }
fn default_extension() -> String { "html".to_string() }
fn default_output() -> String { "fields.json".to_string() }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "template-fields.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring malformed config file '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build a ScannerConfig: CLI value when given, config file otherwise.
pub fn build_scanner_config(
    config: &ScanConfig,
    root: Option<&str>,
    extension: Option<&str>,
    max_depth: Option<usize>,
) -> ScannerConfig {
    ScannerConfig {
        root: PathBuf::from(root.unwrap_or(&config.root)),
        extension: extension.unwrap_or(&config.extension).to_string(),
        max_depth: max_depth.or(config.max_depth),
        skip_hidden: config.skip_hidden,
    }
}
