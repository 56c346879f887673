//! Input validation helpers
//!
//! Text length limits and required-field checks shared by the checkout
//! flows and the login form.

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers, booking references
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Delivery notes, special requests
pub const MAX_NOTE_LEN: usize = 500;

// ── Helpers ─────────────────────────────────────────────────────────

/// True when the value is empty after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Names of the fields in `fields` that are blank, in order
pub fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect()
}
