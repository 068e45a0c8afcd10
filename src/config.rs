use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gradient::Gradient;
use crate::palette::{ColorInput, Palette};

/// A gradient as written in a JSON config file.
///
/// ```json
/// { "domain": [-20, 0, 20], "negative_color": "#dc2626", "positive_color": [22, 163, 74] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub domain: Vec<f64>,
    #[serde(default, alias = "negative_color", skip_serializing_if = "Option::is_none")]
    pub start_color: Option<ColorInput>,
    #[serde(default, alias = "neutral_color", skip_serializing_if = "Option::is_none")]
    pub middle_color: Option<ColorInput>,
    #[serde(default, alias = "positive_color", skip_serializing_if = "Option::is_none")]
    pub end_color: Option<ColorInput>,
}

impl GradientConfig {
    pub fn from_json_str(json: &str) -> Result<GradientConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<GradientConfig> {
        let path = path.as_ref();
        log::debug!("Loading gradient config from {:?}", path);
        GradientConfig::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::from_inputs(
            self.start_color.as_ref(),
            self.middle_color.as_ref(),
            self.end_color.as_ref(),
        )
    }

    pub fn gradient(&self) -> Result<Gradient> {
        Gradient::new(self.domain.as_slice(), self.palette()?)
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
