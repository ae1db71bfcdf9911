use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If a data directory is provided, it cannot be empty
/// - If a log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    data_dir: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(dir) = data_dir
        && dir.trim().is_empty()
    {
        return Err(AppError::config_error("Data directory cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&None, &None).is_ok());
    }

    #[test]
    fn test_empty_values_are_rejected() {
        assert!(validate_config(&Some("  ".to_string()), &None).is_err());
        assert!(validate_config(&None, &Some(String::new())).is_err());
    }

    #[test]
    fn test_log_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("run.log");

        let result = validate_config(&None, &Some(log_path.to_string_lossy().to_string()));
        assert!(result.is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_bare_log_file_name_is_valid() {
        assert!(validate_config(&None, &Some("boxscore.log".to_string())).is_ok());
    }
}
