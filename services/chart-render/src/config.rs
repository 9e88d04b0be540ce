//! Chart renderer configuration.
//!
//! Settings come from, in order of precedence:
//! - command line flags (which also read `WEATHER_LOG_DIR` / `CHART_OUTPUT_DIR`)
//! - an optional YAML file
//! - built-in defaults
//!
//! The YAML file supports environment variable substitution using `${VAR}`
//! and `${VAR:-default}` syntax.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use renderer::ChartStyle;
use wx_common::{Metric, MetricPolicy, PolicyTable};

/// Directory the station logger writes its day logs to.
pub const DEFAULT_LOG_DIR: &str = "/wetter/";

pub const DEFAULT_OUTPUT_DIR: &str = ".";

// ============================================================================
// File format
// ============================================================================

/// Contents of the YAML config file. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub log_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub style: Option<ChartStyle>,
    /// Complete replacement policies, keyed by metric name.
    pub metrics: BTreeMap<Metric, MetricPolicy>,
}

// ============================================================================
// Runtime configuration
// ============================================================================

/// Resolved configuration for a chart run.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub log_dir: PathBuf,
    pub output_dir: PathBuf,
    pub style: ChartStyle,
    pub policies: PolicyTable,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            style: ChartStyle::default(),
            policies: PolicyTable::default(),
        }
    }
}

impl ChartConfig {
    /// Build from an already parsed file.
    pub fn from_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();
        if let Some(dir) = file.log_dir {
            config.log_dir = dir;
        }
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        if let Some(style) = file.style {
            config.style = style;
        }
        config
            .policies
            .apply_overrides(file.metrics)
            .context("Invalid metric policy in config")?;
        Ok(config)
    }

    /// Load a YAML config file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read chart config from {:?}", path.as_ref()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load chart config from {:?}", path.as_ref()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;
        let file: ConfigFile =
            serde_yaml::from_str(&expanded).context("Failed to parse chart config YAML")?;
        Self::from_file(file)
    }

    /// Load `path` if given, then apply directory overrides from the command line.
    pub fn load(
        path: Option<&Path>,
        log_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_yaml(path)?,
            None => Self::default(),
        };
        if let Some(dir) = log_dir {
            config.log_dir = dir;
        }
        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }
        Ok(config)
    }
}

// ============================================================================
// Environment substitution
// ============================================================================

fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next();

            let mut var_expr = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(c) => var_expr.push(c),
                    None => anyhow::bail!("Unclosed variable substitution: ${{{}", var_expr),
                }
            }

            result.push_str(&resolve_var_expr(&var_expr)?);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

/// Resolve `VAR` or `VAR:-default`.
fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match std::env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim())
            .with_context(|| format!("Environment variable {} not set", expr))
    }
}
