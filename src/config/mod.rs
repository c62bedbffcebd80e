pub mod storage;

use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "hr-dashboard", about = "HR dashboard data pipeline")
)]
pub struct CliConfig {
    /// URL of the employee dataset (CSV, first sheet semantics)
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "http://localhost:8080/employees.csv")
    )]
    pub dataset_url: String,

    /// URL of the company/area reference dictionary (JSON)
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "http://localhost:8080/dictionary.json")
    )]
    pub dictionary_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Only include rows with this exact job title
    #[cfg_attr(feature = "cli", arg(long))]
    pub job_title: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn dataset_url(&self) -> &str {
        &self.dataset_url
    }

    fn dictionary_url(&self) -> &str {
        &self.dictionary_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("dataset_url", &self.dataset_url)?;
        validation::validate_url("dictionary_url", &self.dictionary_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(title) = &self.job_title {
            validation::validate_non_empty_string("job_title", title)?;
        }
        Ok(())
    }
}
