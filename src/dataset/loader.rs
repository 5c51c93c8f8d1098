// file: src/dataset/loader.rs
// description: fail-fast CSV loading of the source tables with per-table progress
// reference: https://docs.rs/csv

use csv::ReaderBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::dataset::schema::{self, TableSchema};
use crate::dataset::Dataset;
use crate::error::{AnalyticsError, Result};
use crate::models::Review;
use crate::utils::Validator;

pub struct DatasetLoader {
    config: DatasetConfig,
}

/// Outcome of a presence/header check for one configured table.
#[derive(Debug)]
pub struct TableCheck {
    pub table: &'static str,
    pub path: PathBuf,
    pub error: Option<AnalyticsError>,
}

impl TableCheck {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl DatasetLoader {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Paths of every configured source file, in load order.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![
            self.config.data_dir.join(&self.config.sellers_file),
            self.config.data_dir.join(&self.config.orders_file),
            self.config.data_dir.join(&self.config.order_items_file),
            self.config.data_dir.join(&self.config.reviews_file),
            self.config.data_dir.join(&self.config.payments_file),
        ];
        if let Some(products) = &self.config.products_file {
            paths.push(self.config.data_dir.join(products));
        }
        paths
    }

    /// Reads every configured table into memory. Fails on the first missing
    /// file or column; there is no partial-success mode.
    pub fn load(&self) -> Result<Dataset> {
        Validator::validate_data_dir(&self.config.data_dir)?;

        let table_count = if self.config.products_file.is_some() { 6 } else { 5 };
        let bar = progress_bar(table_count);

        bar.set_message("sellers");
        let sellers = self.read_table(&self.config.sellers_file, &schema::SELLERS)?;
        bar.inc(1);

        bar.set_message("orders");
        let orders = self.read_table(&self.config.orders_file, &schema::ORDERS)?;
        bar.inc(1);

        bar.set_message("order_items");
        let order_items = self.read_table(&self.config.order_items_file, &schema::ORDER_ITEMS)?;
        bar.inc(1);

        bar.set_message("reviews");
        let reviews = self.read_table(&self.config.reviews_file, &schema::REVIEWS)?;
        validate_review_scores(&reviews)?;
        bar.inc(1);

        bar.set_message("payments");
        let payments = self.read_table(&self.config.payments_file, &schema::PAYMENTS)?;
        bar.inc(1);

        let products = match &self.config.products_file {
            Some(file) => {
                bar.set_message("products");
                let products = self.read_table(file, &schema::PRODUCTS)?;
                bar.inc(1);
                Some(products)
            }
            None => None,
        };

        bar.finish_and_clear();

        let dataset = Dataset { sellers, orders, order_items, reviews, payments, products };
        info!(
            "Loaded dataset: {} sellers, {} orders, {} items, {} reviews, {} payments",
            dataset.sellers.len(),
            dataset.orders.len(),
            dataset.order_items.len(),
            dataset.reviews.len(),
            dataset.payments.len()
        );

        Ok(dataset)
    }

    /// Presence and header check for every configured table, without
    /// deserializing rows. Collects one outcome per table instead of
    /// stopping at the first failure.
    pub fn verify(&self) -> Vec<TableCheck> {
        let mut checks = vec![
            self.check_table(&self.config.sellers_file, &schema::SELLERS),
            self.check_table(&self.config.orders_file, &schema::ORDERS),
            self.check_table(&self.config.order_items_file, &schema::ORDER_ITEMS),
            self.check_table(&self.config.reviews_file, &schema::REVIEWS),
            self.check_table(&self.config.payments_file, &schema::PAYMENTS),
        ];
        if let Some(products) = &self.config.products_file {
            checks.push(self.check_table(products, &schema::PRODUCTS));
        }
        checks
    }

    fn read_table<T: DeserializeOwned>(
        &self,
        file_name: &str,
        schema: &TableSchema,
    ) -> Result<Vec<T>> {
        let path = self.config.data_dir.join(file_name);
        if !path.is_file() {
            return Err(AnalyticsError::missing_file(path));
        }

        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| csv_error(schema.name, e))?;

        let headers = reader.headers().map_err(|e| csv_error(schema.name, e))?.clone();
        schema.validate_headers(&headers)?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record.map_err(|e| csv_error(schema.name, e))?);
        }

        debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn check_table(&self, file_name: &str, schema: &TableSchema) -> TableCheck {
        let path = self.config.data_dir.join(file_name);
        let error = self.check_headers(&path, schema).err();
        TableCheck { table: schema.name, path, error }
    }

    fn check_headers(&self, path: &std::path::Path, schema: &TableSchema) -> Result<()> {
        if !path.is_file() {
            return Err(AnalyticsError::missing_file(path));
        }

        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| csv_error(schema.name, e))?;
        let headers = reader.headers().map_err(|e| csv_error(schema.name, e))?;
        schema.validate_headers(headers)
    }
}

fn validate_review_scores(reviews: &[Review]) -> Result<()> {
    for review in reviews {
        if !review.is_valid_score() {
            return Err(AnalyticsError::Validation(format!(
                "review_score {} for order {} is outside the 1-5 domain",
                review.review_score, review.order_id
            )));
        }
    }
    Ok(())
}

fn csv_error(table: &str, source: csv::Error) -> AnalyticsError {
    AnalyticsError::CsvParse { table: table.to_string(), source }
}

fn progress_bar(tables: u64) -> ProgressBar {
    let bar = ProgressBar::new(tables);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{bar:30.cyan/blue}] {pos}/{len} tables {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    bar
}
