//! Field-level form validation.
//!
//! Local and pre-submission: a failing check blocks the API call entirely.
//! Each helper returns `Some(message)` on failure so views can collect
//! per-field errors the way the pages render them.

/// Non-empty after trimming.
pub fn required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

/// Minimal email shape check; the backend does the authoritative validation.
pub fn email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Email is required.".to_string());
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Some("Enter a valid email address.".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Some("Enter a valid email address.".to_string());
    }
    None
}

/// Positive integer identifier (customer/car ids in the rental form).
pub fn numeric_id(value: &str, message: &str) -> Option<String> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => None,
        _ => Some(message.to_string()),
    }
}

/// Plausible model year.
pub fn year(value: &str) -> Option<String> {
    match value.trim().parse::<i32>() {
        Ok(y) if (1900..=2100).contains(&y) => None,
        _ => Some("Enter a valid year.".to_string()),
    }
}

/// Non-negative decimal amount, as the backend expects for money fields.
pub fn decimal_amount(value: &str, message: &str) -> Option<String> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount >= 0.0 && amount.is_finite() => None,
        _ => Some(message.to_string()),
    }
}

/// ISO calendar date (`YYYY-MM-DD`).
pub fn iso_date(value: &str, message: &str) -> Option<String> {
    if value.trim().parse::<chrono::NaiveDate>().is_ok() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        assert!(required("  ", "Brand is required.").is_some());
        assert!(required("Toyota", "Brand is required.").is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("ops@example.com").is_none());
        assert!(email("").is_some());
        assert!(email("not-an-email").is_some());
        assert!(email("a@b").is_some());
        assert!(email("@example.com").is_some());
    }

    #[test]
    fn test_numeric_id_rejects_zero_and_text() {
        assert!(numeric_id("12", "id").is_none());
        assert!(numeric_id("0", "id").is_some());
        assert!(numeric_id("-3", "id").is_some());
        assert!(numeric_id("twelve", "id").is_some());
    }

    #[test]
    fn test_year_bounds() {
        assert!(year("2021").is_none());
        assert!(year("1899").is_some());
        assert!(year("21").is_some());
    }

    #[test]
    fn test_decimal_amount() {
        assert!(decimal_amount("59.90", "price").is_none());
        assert!(decimal_amount("0", "price").is_none());
        assert!(decimal_amount("-1", "price").is_some());
        assert!(decimal_amount("abc", "price").is_some());
    }

    #[test]
    fn test_iso_date() {
        assert!(iso_date("2024-01-13", "date").is_none());
        assert!(iso_date("13/01/2024", "date").is_some());
        assert!(iso_date("", "date").is_some());
    }
}
