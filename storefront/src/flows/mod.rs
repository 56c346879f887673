//! Checkout flows
//!
//! | Flow | Steps | Ends with |
//! |------|-------|-----------|
//! | [`delivery`] | details → payment | order confirmation, cart cleared |
//! | [`pre_order`] | schedule → items → payment | pre-order confirmation |
//! | [`booking`] | form | booking confirmation (resettable) |
//!
//! All three run on [`StepFlow`]. Required-field checks happen when the
//! guest tries to move on, and surface as a [`ValidationError`] notice.

pub mod booking;
pub mod delivery;
pub mod pre_order;
pub mod step;

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};

pub use booking::{BookingConfirmation, BookingFlow, BookingStep, BookingView};
pub use delivery::{DeliveryConfirmation, DeliveryFlow, DeliveryStep, DeliveryView};
pub use pre_order::{PreOrderConfirmation, PreOrderFlow, PreOrderStep, PreOrderView};
pub use step::{FlowAction, FlowState, StepFlow, Steps};

/// Missing or malformed form input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required text fields left blank
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Please select date and time")]
    MissingSchedule,

    #[error("Date cannot be in the past")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("Please select at least one item")]
    EmptySelection,

    #[error("{field} is too long (max {max} chars)")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingFields(_) | Self::MissingSchedule => ErrorCode::RequiredField,
            Self::DateInPast { .. } => ErrorCode::BookingDateInPast,
            Self::EmptySelection => ErrorCode::SelectionEmpty,
            Self::TooLong { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ValidationError::MissingFields(fields) => app.with_detail("fields", fields),
            ValidationError::DateInPast { date, today } => app
                .with_detail("date", date.to_string())
                .with_detail("min_date", today.to_string()),
            ValidationError::TooLong { field, max } => {
                app.with_detail("field", field).with_detail("max", max)
            }
            ValidationError::MissingSchedule | ValidationError::EmptySelection => app,
        }
    }
}

/// Flow operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This order has already been submitted")]
    AlreadySubmitted,

    #[error("cannot {} from step {from}", .action.as_str())]
    InvalidTransition { action: FlowAction, from: String },

    /// Placeholder payment method
    #[error("Payment method coming soon")]
    PaymentUnavailable(&'static str),

    #[error("Your cart is empty")]
    CartEmpty,

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Validation(e) => e.into(),
            FlowError::AlreadySubmitted => AppError::new(ErrorCode::FlowAlreadySubmitted),
            FlowError::InvalidTransition { action, from } => AppError::with_message(
                ErrorCode::InvalidStepTransition,
                format!("cannot {} from step {}", action.as_str(), from),
            )
            .with_detail("action", action.as_str())
            .with_detail("step", from),
            FlowError::PaymentUnavailable(label) => {
                AppError::new(ErrorCode::PaymentMethodUnavailable).with_detail("method", label)
            }
            FlowError::CartEmpty => AppError::new(ErrorCode::CartEmpty),
            FlowError::ItemNotFound(id) => AppError::with_message(
                ErrorCode::MenuItemNotFound,
                format!("Menu item not found: {}", id),
            )
            .with_detail("item_id", id),
        }
    }
}

/// Reject `date` if it is before `today`
pub(crate) fn ensure_not_past(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < today {
        return Err(ValidationError::DateInPast { date, today });
    }
    Ok(())
}

/// Reject text longer than `max` characters
pub(crate) fn ensure_max_len(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
