//! Redaction helpers for log output.
//!
//! Customer contact details and relay keys must never reach the logs in
//! clear text.

use std::fmt;

/// Masked display of a secret: first 4 characters then `***`
#[derive(Clone, Debug)]
pub struct SensitiveValue<'a> {
    inner: &'a str,
}

impl<'a> SensitiveValue<'a> {
    /// # Example
    /// ```
    /// use studiofolio::logging::SensitiveValue;
    ///
    /// assert_eq!(SensitiveValue::new("pk_live_abcdef").to_string(), "pk_l***");
    /// ```
    pub fn new(value: &'a str) -> Self {
        Self { inner: value }
    }
}

impl<'a> fmt::Display for SensitiveValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.inner.chars().take(4).collect();
        if self.inner.chars().count() <= 8 {
            write!(f, "***")
        } else {
            write!(f, "{}***", visible)
        }
    }
}

/// Keep the first character of the local part and the whole domain.
///
/// ```
/// use studiofolio::logging::redact_email;
///
/// assert_eq!(redact_email("priya@example.com"), "p***@example.com");
/// ```
pub fn redact_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}

/// Only the last 4 digits of a phone number
pub fn redact_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("***{}", tail)
}
