pub const MSISDN_MIN_DIGITS: usize = 5;

/// E.164 caps a full international number at 15 digits.
pub const MSISDN_MAX_DIGITS: usize = 15;

pub fn validate_msisdn_digits(digits: &str) -> Result<(), String> {
    if digits.is_empty() {
        return Err("MSISDN cannot be empty".to_string());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("MSISDN '{digits}' must contain digits only"));
    }
    if digits.len() < MSISDN_MIN_DIGITS || digits.len() > MSISDN_MAX_DIGITS {
        return Err(format!(
            "MSISDN '{digits}' must have between {MSISDN_MIN_DIGITS} and {MSISDN_MAX_DIGITS} digits"
        ));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
