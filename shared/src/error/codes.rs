//! Unified error codes for the storefront
//!
//! This module defines all error codes used by the storefront API and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Cart and order flow errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 7xxx: Booking errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Password too short
    PasswordTooShort = 1008,
    /// Identity provider rejected the request
    AuthProviderError = 1009,

    // ==================== 4xxx: Cart / Order ====================
    /// Cart is empty
    CartEmpty = 4001,
    /// No items selected
    SelectionEmpty = 4002,
    /// Flow has already been submitted
    FlowAlreadySubmitted = 4010,
    /// Flow action is not valid for the current step
    InvalidStepTransition = 4011,

    // ==================== 5xxx: Payment ====================
    /// Payment method is not available yet
    PaymentMethodUnavailable = 5003,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu category not found
    CategoryNotFound = 6101,

    // ==================== 7xxx: Booking ====================
    /// Requested date is before today
    BookingDateInPast = 7001,

}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Please fill in all required fields",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",
            ErrorCode::AuthProviderError => "Authentication failed",

            // Cart / Order
            ErrorCode::CartEmpty => "Your cart is empty",
            ErrorCode::SelectionEmpty => "Please select at least one item",
            ErrorCode::FlowAlreadySubmitted => "This order has already been submitted",
            ErrorCode::InvalidStepTransition => "Action is not available at this step",

            // Payment
            ErrorCode::PaymentMethodUnavailable => "Payment method coming soon",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::CategoryNotFound => "Menu category not found",

            // Booking
            ErrorCode::BookingDateInPast => "Date cannot be in the past",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),
            1008 => Ok(ErrorCode::PasswordTooShort),
            1009 => Ok(ErrorCode::AuthProviderError),

            // Cart / Order
            4001 => Ok(ErrorCode::CartEmpty),
            4002 => Ok(ErrorCode::SelectionEmpty),
            4010 => Ok(ErrorCode::FlowAlreadySubmitted),
            4011 => Ok(ErrorCode::InvalidStepTransition),

            // Payment
            5003 => Ok(ErrorCode::PaymentMethodUnavailable),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // Booking
            7001 => Ok(ErrorCode::BookingDateInPast),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
