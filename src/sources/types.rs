use std::env;
use std::path::PathBuf;

const FEED_PATH_VAR: &str = "HOUSING_FEED_PATH";
const OUTPUT_PATH_VAR: &str = "HOUSING_OUTPUT_PATH";

/// Where the binary reads the feed from and writes listings to
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Saved feed response (JSON)
    pub feed_path: PathBuf,
    /// Destination for the normalized listing set
    pub output_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            feed_path: PathBuf::from("feed.json"),
            output_path: PathBuf::from("normalized_listings.json"),
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `HOUSING_FEED_PATH` / `HOUSING_OUTPUT_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            feed_path: lookup(FEED_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.feed_path),
            output_path: lookup(OUTPUT_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
        }
    }

    /// A positional CLI argument wins over the environment
    pub fn with_feed_path(mut self, feed_path: Option<String>) -> Self {
        if let Some(path) = feed_path {
            self.feed_path = PathBuf::from(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_overrides_defaults() {
        let config = RunConfig::from_lookup(|key| match key {
            OUTPUT_PATH_VAR => Some("out/listings.json".to_string()),
            _ => None,
        });
        assert_eq!(config.feed_path, PathBuf::from("feed.json"));
        assert_eq!(config.output_path, PathBuf::from("out/listings.json"));
    }

    #[test]
    fn cli_path_wins() {
        let config = RunConfig::default().with_feed_path(Some("today.json".to_string()));
        assert_eq!(config.feed_path, PathBuf::from("today.json"));

        let config = RunConfig::default().with_feed_path(None);
        assert_eq!(config.feed_path, PathBuf::from("feed.json"));
    }
}
