use crate::utils::error::{HireError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(HireError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate bicycle ID".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bicycles.id", "B001").is_ok());
        assert!(validate_non_empty_string("bicycles.id", "").is_err());
        assert!(validate_non_empty_string("bicycles.id", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price("bicycles.price_per_hour", 100.0).is_ok());
        assert!(validate_positive_price("bicycles.price_per_hour", 0.0).is_err());
        assert!(validate_positive_price("bicycles.price_per_hour", -5.0).is_err());
        assert!(validate_positive_price("bicycles.price_per_hour", f64::NAN).is_err());
        assert!(validate_positive_price("bicycles.price_per_hour", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("bicycles.id", ["B001", "B002"]).is_ok());
        assert!(validate_unique_ids("bicycles.id", ["B001", "B002", "B001"]).is_err());
    }
}
