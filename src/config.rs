use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Layered load: global config, then the project file next to the
    /// portfolio document, then `FOLIO_*` environment overrides. An
    /// explicit path (flag or `FOLIO_CONFIG`) replaces the layering.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&root.join("config.toml"))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("folio/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.content {
            self.content.merge(patch);
        }
        if let Some(patch) = patch.chart {
            self.chart.merge(patch);
        }
        if let Some(patch) = patch.counter {
            self.counter.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("FOLIO_CONTENT") {
            self.content.path = Some(PathBuf::from(value));
        }
        if let Some(value) = env_usize("FOLIO_CHART_WIDTH")? {
            self.chart.width = value;
        }
        if let Some(value) = env_usize("FOLIO_CHART_HEIGHT")? {
            self.chart.height = value;
        }
        if let Some(value) = env_bool("FOLIO_CHART_FILL") {
            self.chart.fill = value;
        }
        if let Some(value) = env_f64("FOLIO_COUNTER_DURATION")? {
            self.counter.duration_secs = value;
        }
        if let Some(value) = env_bool("FOLIO_UNICODE") {
            self.output.unicode = value;
        }
        Ok(())
    }
}

/// Where the portfolio document lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ContentConfig {
    fn merge(&mut self, patch: ContentConfigPatch) {
        if let Some(path) = patch.path {
            self.path = Some(path);
        }
    }
}

/// Radar plot dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: usize,
    #[serde(default = "default_chart_height")]
    pub height: usize,
    #[serde(default = "default_true")]
    pub fill: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            fill: true,
        }
    }
}

impl ChartConfig {
    fn merge(&mut self, patch: ChartConfigPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(fill) = patch.fill {
            self.fill = fill;
        }
    }
}

/// Counter pacing. Per-counter targets come from content; the total
/// reveal duration is a presentation knob and lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_counter_duration")]
    pub duration_secs: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_counter_duration(),
        }
    }
}

impl CounterConfig {
    fn merge(&mut self, patch: CounterConfigPatch) {
        if let Some(duration_secs) = patch.duration_secs {
            self.duration_secs = duration_secs;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputConfigPatch) {
        if let Some(unicode) = patch.unicode {
            self.unicode = unicode;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    content: Option<ContentConfigPatch>,
    chart: Option<ChartConfigPatch>,
    counter: Option<CounterConfigPatch>,
    output: Option<OutputConfigPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentConfigPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartConfigPatch {
    width: Option<usize>,
    height: Option<usize>,
    fill: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct CounterConfigPatch {
    duration_secs: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputConfigPatch {
    unicode: Option<bool>,
}

const fn default_chart_width() -> usize {
    57
}

const fn default_chart_height() -> usize {
    19
}

const fn default_counter_duration() -> f64 {
    2.0
}

const fn default_true() -> bool {
    true
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    env_string(key).map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    env_string(key)
        .map(|value| {
            value
                .parse()
                .map_err(|err| FolioError::Config(format!("{key}: {err}")))
        })
        .transpose()
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    env_string(key)
        .map(|value| {
            value
                .parse()
                .map_err(|err| FolioError::Config(format!("{key}: {err}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.chart.width, 57);
        assert_eq!(config.chart.height, 19);
        assert!(config.chart.fill);
        assert!((config.counter.duration_secs - 2.0).abs() < f64::EPSILON);
        assert!(config.output.unicode);
        assert!(config.content.path.is_none());
    }

    #[test]
    fn explicit_patch_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart]\nwidth = 81\n\n[counter]\nduration_secs = 0.5\n").unwrap();

        let config = Config::load(Some(&path), dir.path()).unwrap();
        assert_eq!(config.chart.width, 81);
        // Untouched keys keep their defaults.
        assert_eq!(config.chart.height, 19);
        assert!((config.counter.duration_secs - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_explicit_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("nope.toml");
        let config = Config::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.chart.width, 57);
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart\nwidth = ").unwrap();
        let err = Config::load(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
