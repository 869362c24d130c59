use cron_parser_core::{ScheduleField, NAME_COLUMN_WIDTH};
use serde::{Deserialize, Serialize};

use crate::validation::ConfigValidator;

/// Upper limit for the padded name column.
pub const MAX_NAME_COLUMN_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {s}. Valid formats: text, json")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How a parsed expression is printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub name_column_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            name_column_width: NAME_COLUMN_WIDTH,
        }
    }
}

/// Narrowest column that still fits every field name.
pub fn min_name_column_width() -> usize {
    ScheduleField::ALL
        .iter()
        .map(|field| field.display_name().len())
        .max()
        .unwrap_or(0)
}

impl ConfigValidator for OutputConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        let min_width = min_name_column_width();
        if self.name_column_width < min_width || self.name_column_width > MAX_NAME_COLUMN_WIDTH {
            return Err(crate::ConfigError::Validation(format!(
                "Name column width must be between {min_width} and {MAX_NAME_COLUMN_WIDTH}, got {}",
                self.name_column_width
            )));
        }
        Ok(())
    }
}
