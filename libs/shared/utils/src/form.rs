//! Conversions from submitted form strings into draft fields.

use std::str::FromStr;

/// Blank inputs become `None` so optional fields are sent as null rather
/// than as empty strings the backend would have to validate.
pub fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric inputs fall back to the type's default when blank or malformed;
/// the browser's `type="number"` is the only validation.
pub fn number_or_default<T: FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

pub fn checkbox(raw: Option<&str>) -> bool {
    matches!(raw, Some("on" | "true" | "1" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" Pune ".to_string()).as_deref(), Some("Pune"));
        assert_eq!(non_empty("Pune".to_string()).as_deref(), Some("Pune"));
    }

    #[test]
    fn test_number_or_default() {
        assert_eq!(number_or_default::<u32>("42"), 42);
        assert_eq!(number_or_default::<u32>(""), 0);
        assert_eq!(number_or_default::<f64>("499.5"), 499.5);
        assert_eq!(number_or_default::<u32>("-1"), 0);
    }

    #[test]
    fn test_checkbox() {
        assert!(checkbox(Some("on")));
        assert!(!checkbox(None));
        assert!(!checkbox(Some("off")));
    }
}
