//! Credential validation and display formatting shared by the form layer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordIssue {
    #[error("password must be at least 8 characters")]
    TooShort,
    #[error("password must contain an uppercase letter")]
    NoUppercase,
    #[error("password must contain a lowercase letter")]
    NoLowercase,
    #[error("password must contain a digit")]
    NoDigit,
    #[error("password must contain a special character")]
    NoSpecial,
}

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Structural email check: one `@`, non-empty local part, dotted domain with
/// an alphabetic top-level part of at least two characters.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Password policy applied before any sign-up request is sent.
pub fn validate_password(password: &str) -> Result<(), PasswordIssue> {
    if password.chars().count() < 8 {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordIssue::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordIssue::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::NoDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PasswordIssue::NoSpecial);
    }
    Ok(())
}

/// Format an amount as `2 400.00 zł`: two decimals, thousands separated by
/// spaces.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02} zł")
}

/// Format a duration in hours as `45 min`, `2 h`, or `2.5 h`.
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        let minutes = (hours * 60.0) as u32;
        format!("{minutes} min")
    } else if hours == hours.trunc() {
        format!("{} h", hours as u64)
    } else {
        format!("{hours:.1} h")
    }
}
