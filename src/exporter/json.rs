// file: src/exporter/json.rs
// description: json export of the dashboard report for the rendering layer

use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::error::{AnalyticsError, Result};
use crate::models::DashboardReport;
use crate::utils::Validator;

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub files: Vec<String>,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        Validator::validate_output_dir(&output_dir)?;
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes one file per report section plus a manifest listing them.
    pub fn export(&self, report: &DashboardReport, pretty: bool) -> Result<ExportManifest> {
        info!("Exporting report to {}", self.output_dir.display());

        let mut files = vec![
            self.write_section("summary.json", &report.summary, pretty)?,
            self.write_section("seller_performance.json", &report.seller_performance, pretty)?,
            self.write_section("monthly_trend.json", &report.monthly_trend, pretty)?,
            self.write_section("satisfaction.json", &report.satisfaction, pretty)?,
        ];

        if let Some(top_categories) = &report.top_categories {
            files.push(self.write_section("top_categories.json", top_categories, pretty)?);
        }

        let manifest = ExportManifest { exported_at: Utc::now().to_rfc3339(), files };
        self.write_section("manifest.json", &manifest, pretty)?;

        info!("Export complete: {} section files", manifest.files.len());
        Ok(manifest)
    }

    fn write_section<T: Serialize>(&self, name: &str, value: &T, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| AnalyticsError::Serialization(e.to_string()))?;

        let path = self.output_dir.join(name);
        fs::write(&path, json)?;
        Ok(name.to_string())
    }
}
