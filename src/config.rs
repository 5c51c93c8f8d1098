// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use chrono::NaiveDate;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, Result};
use crate::models::PerformanceCategory;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub sellers_file: String,
    pub orders_file: String,
    pub order_items_file: String,
    pub reviews_file: String,
    pub payments_file: String,
    /// The products table is absent in some dataset variants.
    #[serde(default)]
    pub products_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterConfig {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub min_score: Option<u8>,
    pub max_score: Option<u8>,
    #[serde(default)]
    pub performance_categories: Vec<PerformanceCategory>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub top_k: usize,
    pub output_dir: PathBuf,
    pub pretty_json: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SHOP_INSIGHTS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalyticsError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalyticsError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            dataset: DatasetConfig {
                data_dir: PathBuf::from("data"),
                sellers_file: "sellers_dataset.csv".to_string(),
                orders_file: "orders_dataset.csv".to_string(),
                order_items_file: "order_items_dataset.csv".to_string(),
                reviews_file: "order_reviews_dataset.csv".to_string(),
                payments_file: "order_payments_dataset.csv".to_string(),
                products_file: Some("products_dataset.csv".to_string()),
            },
            filters: FilterConfig::default(),
            report: ReportConfig {
                top_k: 5,
                output_dir: PathBuf::from("./exports"),
                pretty_json: false,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.report.top_k == 0 {
            return Err(AnalyticsError::Config(
                "report.top_k must be greater than 0".to_string(),
            ));
        }

        if let (Some(start), Some(end)) = (self.filters.start_date, self.filters.end_date)
            && start > end
        {
            return Err(AnalyticsError::invalid_range(start, end));
        }

        for score in [self.filters.min_score, self.filters.max_score].into_iter().flatten() {
            if !(1..=5).contains(&score) {
                return Err(AnalyticsError::invalid_range(score, 5));
            }
        }

        Ok(())
    }
}
