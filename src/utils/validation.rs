use crate::error::{DockhubError, Result};

pub const MAX_PAGE_SIZE: u32 = 100;

/// Per-field checks applied to tool parameters before any network call.
pub struct InputValidator;

impl InputValidator {
    /// Result-count limits must stay within the Hub's page-size range.
    pub fn validate_limit(limit: u32) -> Result<()> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(DockhubError::InvalidInput(format!(
                "limit must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, limit
            )));
        }
        Ok(())
    }

    /// Accepts a comma-separated list of `host:container` pairs with numeric
    /// ports. An empty string means no mappings.
    pub fn validate_port_mappings(port_mapping: &str) -> Result<()> {
        if port_mapping.trim().is_empty() {
            return Ok(());
        }
        for mapping in port_mapping.split(',') {
            let mapping = mapping.trim();
            let valid = matches!(
                mapping.split_once(':'),
                Some((host, container))
                    if host.parse::<u16>().is_ok() && container.parse::<u16>().is_ok()
            );
            if !valid {
                return Err(DockhubError::InvalidInput(format!(
                    "port mapping `{}` is not of the form `host:container`",
                    mapping
                )));
            }
        }
        Ok(())
    }

    /// Accepts a comma-separated list of `KEY=value` pairs. An empty string
    /// means no variables.
    pub fn validate_environment_variables(environment_variables: &str) -> Result<()> {
        if environment_variables.trim().is_empty() {
            return Ok(());
        }
        for pair in environment_variables.split(',') {
            let pair = pair.trim();
            let valid = matches!(pair.split_once('='), Some((key, _)) if !key.is_empty());
            if !valid {
                return Err(DockhubError::InvalidInput(format!(
                    "environment variable `{}` is not of the form `KEY=value`",
                    pair
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_limit() {
        assert!(InputValidator::validate_limit(0).is_err());
        assert!(InputValidator::validate_limit(1).is_ok());
        assert!(InputValidator::validate_limit(100).is_ok());
        assert!(InputValidator::validate_limit(101).is_err());
    }

    #[test]
    fn test_validate_port_mappings() {
        assert!(InputValidator::validate_port_mappings("").is_ok());
        assert!(InputValidator::validate_port_mappings("8080:80").is_ok());
        assert!(InputValidator::validate_port_mappings("8080:80,443:443").is_ok());
        assert!(InputValidator::validate_port_mappings("8080").is_err());
        assert!(InputValidator::validate_port_mappings("web:80").is_err());
    }

    #[test]
    fn test_validate_environment_variables() {
        assert!(InputValidator::validate_environment_variables("").is_ok());
        assert!(InputValidator::validate_environment_variables("DB_NAME=mydb").is_ok());
        assert!(
            InputValidator::validate_environment_variables("DB_NAME=mydb,DB_USER=user").is_ok()
        );
        assert!(InputValidator::validate_environment_variables("JUST_A_NAME").is_err());
        assert!(InputValidator::validate_environment_variables("=value").is_err());
    }
}
