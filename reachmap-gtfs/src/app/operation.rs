//! graph build and summary scripts for GTFS schedule feeds.
use std::{path::Path, time::Duration};

use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::{
    config::{BuildConfiguration, FeedSourceConfig},
    graph::{
        build_feed_bundle, write_bundle, EdgeAggregation, GraphOutputFormat, GraphSummary,
        UnknownStopPolicy,
    },
};

/// where to read the feed from. at most one of the locations may be given;
/// without any, the `source` section of the configuration file is used.
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct SourceArgs {
    /// directory holding stops.txt, trips.txt and stop_times.txt
    #[arg(long, conflicts_with_all = ["zip_file", "base_url"])]
    pub input_directory: Option<String>,
    /// GTFS zip archive
    #[arg(long, conflicts_with_all = ["input_directory", "base_url"])]
    pub zip_file: Option<String>,
    /// base URL below which the feed tables are published
    #[arg(long, conflicts_with_all = ["input_directory", "zip_file"])]
    pub base_url: Option<String>,
    /// HTTP request timeout. provide in human-readable time values
    /// 30s, 2m, 1h...
    #[arg(long, value_parser = parse_duration, requires = "base_url")]
    pub timeout: Option<Duration>,
    /// path to .toml or .json file with build parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// derive trip legs on a single thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GtfsOperation {
    /// build the travel time graph of a feed and write it to a directory
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// output path for the graph file
        #[arg(long, default_value_t = String::from("."))]
        output_directory: String,
        #[arg(long, value_enum)]
        output_format: Option<GraphOutputFormat>,
        #[arg(long, value_enum)]
        edge_aggregation: Option<EdgeAggregation>,
        #[arg(long, value_enum)]
        unknown_stop_policy: Option<UnknownStopPolicy>,
        /// replace an existing graph file
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// print a one-line CSV summary of a feed and its travel time graph
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl GtfsOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            GtfsOperation::Build {
                source,
                output_directory,
                output_format,
                edge_aggregation,
                unknown_stop_policy,
                overwrite,
            } => {
                let mut conf = source.configuration()?;
                if let Some(format) = output_format {
                    conf.output_format = *format;
                }
                if let Some(aggregation) = edge_aggregation {
                    conf.graph.edge_aggregation = *aggregation;
                }
                if let Some(policy) = unknown_stop_policy {
                    conf.graph.unknown_stop_policy = *policy;
                }
                conf.overwrite |= *overwrite;
                run_build(source, &conf, Path::new(output_directory))
            }
            GtfsOperation::Summary { source } => {
                let conf = source.configuration()?;
                let feed_source = source.feed_source_config(&conf)?.build()?;
                log::info!("reading feed from {}", feed_source.describe());
                let bundle = build_feed_bundle(feed_source.as_ref(), &conf.graph)?;
                println!("{}", GraphSummary::HEADER);
                println!("{}", bundle.summary());
                Ok(())
            }
        }
    }
}

impl SourceArgs {
    /// the configuration file contents, or defaults, with the command line
    /// thread setting applied.
    fn configuration(&self) -> Result<BuildConfiguration, AppError> {
        let mut conf = match &self.configuration_file {
            None => BuildConfiguration::default(),
            Some(f) => {
                log::info!("reading build configuration from {f}");
                BuildConfiguration::try_from(f)?
            }
        };
        if self.sequential {
            conf.graph.parallelize = false;
        }
        Ok(conf)
    }

    /// the feed location given on the command line, falling back to the
    /// configuration file.
    fn feed_source_config(&self, conf: &BuildConfiguration) -> Result<FeedSourceConfig, AppError> {
        if let Some(dir) = &self.input_directory {
            Ok(FeedSourceConfig::Directory { path: dir.into() })
        } else if let Some(zip) = &self.zip_file {
            Ok(FeedSourceConfig::Zip { path: zip.into() })
        } else if let Some(base_url) = &self.base_url {
            Ok(FeedSourceConfig::Http {
                base_url: base_url.clone(),
                timeout: self
                    .timeout
                    .map(|t| humantime::format_duration(t).to_string()),
            })
        } else {
            conf.source.clone().ok_or_else(|| {
                AppError::ConfigurationError(String::from(
                    "no feed location given, use --input-directory, --zip-file, --base-url or a configuration file source",
                ))
            })
        }
    }
}

fn run_build(
    source: &SourceArgs,
    conf: &BuildConfiguration,
    output_directory: &Path,
) -> Result<(), AppError> {
    let feed_source = source.feed_source_config(conf)?.build()?;
    log::info!("reading feed from {}", feed_source.describe());
    let bundle = build_feed_bundle(feed_source.as_ref(), &conf.graph)?;
    std::fs::create_dir_all(output_directory)?;
    match write_bundle(&bundle, output_directory, &conf.output_format, conf.overwrite)? {
        Some(path) => log::info!("graph written to {}", path.to_string_lossy()),
        None => log::warn!(
            "{} already exists in {}, skipping write (use --overwrite to replace it)",
            conf.output_format.filename(),
            output_directory.to_string_lossy()
        ),
    }
    Ok(())
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {}", e))
}
