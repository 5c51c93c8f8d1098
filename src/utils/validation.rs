// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use std::path::Path;

use crate::error::{AnalyticsError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_data_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalyticsError::Validation(format!(
                "Data directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(AnalyticsError::Validation(format!(
                "Data path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_output_dir(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(AnalyticsError::Validation(format!(
                "Output path exists but is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_directory_passes() {
        let dir = TempDir::new().unwrap();
        assert!(Validator::validate_data_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(Validator::validate_data_dir(&missing).is_err());
    }

    #[test]
    fn test_file_as_data_dir_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.csv");
        std::fs::write(&file, "x").unwrap();
        assert!(Validator::validate_data_dir(&file).is_err());
    }
}
