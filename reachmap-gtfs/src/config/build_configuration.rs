use serde::{Deserialize, Serialize};

use super::FeedSourceConfig;
use crate::{
    app::AppError,
    graph::{GraphBuildConfig, GraphOutputFormat},
};

/// defines behaviors for a graph build run
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfiguration {
    /// feed location, unless given on the command line
    pub source: Option<FeedSourceConfig>,
    #[serde(flatten)]
    pub graph: GraphBuildConfig,
    pub output_format: GraphOutputFormat,
    pub overwrite: bool,
}

impl TryFrom<&String> for BuildConfiguration {
    type Error = AppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(AppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::BuildConfiguration;
    use crate::app::AppError;
    use crate::config::FeedSourceConfig;
    use crate::graph::{EdgeAggregation, GraphOutputFormat, UnknownStopPolicy};
    use std::path::PathBuf;

    fn write_config(filename: &str, contents: &str) -> String {
        let dir = std::env::temp_dir().join(format!("reachmap-gtfs-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp directory should be writable");
        let path = dir.join(filename);
        std::fs::write(&path, contents).expect("config file should be writable");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_read_toml() {
        let f = write_config(
            "build.toml",
            r#"
edge_aggregation = "mean"
unknown_stop_policy = "drop"
parallelize = false
output_format = "json"

[source]
type = "directory"
path = "feeds/sibra"
"#,
        );
        let conf = BuildConfiguration::try_from(&f).expect("valid configuration");
        assert_eq!(conf.graph.edge_aggregation, EdgeAggregation::Mean);
        assert_eq!(conf.graph.unknown_stop_policy, UnknownStopPolicy::Drop);
        assert!(!conf.graph.parallelize);
        assert_eq!(conf.output_format, GraphOutputFormat::Json);
        assert!(!conf.overwrite);
        assert_eq!(
            conf.source,
            Some(FeedSourceConfig::Directory {
                path: PathBuf::from("feeds/sibra")
            })
        );
    }

    #[test]
    fn test_read_json_with_defaults() {
        let f = write_config(
            "build.json",
            r#"{"source": {"type": "http", "base_url": "https://example.org/gtfs", "timeout": "30s"}}"#,
        );
        let conf = BuildConfiguration::try_from(&f).expect("valid configuration");
        assert_eq!(conf.graph, Default::default());
        assert_eq!(conf.output_format, GraphOutputFormat::Csv);
        assert!(matches!(
            conf.source,
            Some(FeedSourceConfig::Http { timeout: Some(_), .. })
        ));
    }

    #[test]
    fn test_unsupported_file_type() {
        let f = String::from("build.yaml");
        assert!(matches!(
            BuildConfiguration::try_from(&f),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let f = write_config("bad.toml", "edge_aggregation = \"median\"\n");
        assert!(matches!(
            BuildConfiguration::try_from(&f),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
