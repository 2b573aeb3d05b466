use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::string::String;

use crate::category::{CategorySettings, MarkerClassifier};
use crate::record::Schema;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub report_dir: String,
    pub schema: Schema,
    pub classifier_settings: ClassifierSettings,
    pub plot_settings: PlotSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifierSettings {
    /// when false every run goes to `default_category`
    pub split_by_marker: bool,
    pub categories: Vec<CategorySettings>,
    pub default_category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlotSettings {
    pub enabled: bool,
    pub plot_dir: String,
}

impl ClassifierSettings {
    pub fn build(&self) -> MarkerClassifier {
        if self.split_by_marker {
            MarkerClassifier::new(&self.categories, &self.default_category)
        } else {
            MarkerClassifier::single(&self.default_category)
        }
    }
}

impl Settings {
    /// merge the config files in order, later files override earlier ones
    pub fn new(config_path: Vec<String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for i in config_path {
            builder = builder.add_source(File::with_name(&i));
        }
        Self::validated(builder.build()?.try_deserialize()?)
    }

    /// same as `new` but from in memory toml documents
    pub fn from_toml_strs(contents: &[&str]) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for content in contents {
            builder = builder.add_source(File::from_str(content, FileFormat::Toml));
        }
        Self::validated(builder.build()?.try_deserialize()?)
    }

    fn validated(settings: Settings) -> Result<Self, ConfigError> {
        if !settings.schema.is_valid() {
            return Err(ConfigError::Message(format!(
                "schema phase_count {} does not match has_comm_column = {}",
                settings.schema.phase_count, settings.schema.has_comm_column
            )));
        }
        if settings.classifier_settings.default_category.is_empty() {
            return Err(ConfigError::Message(
                "classifier_settings.default_category must not be empty".into(),
            ));
        }
        Ok(settings)
    }
}
