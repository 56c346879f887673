//! Table booking flow
//!
//! One form step. Submitting shows a confirmation; "make another booking"
//! resets back to the form with the previous values still filled in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{BookingForm, GuestCount, TimeSlot};

use super::step::{FlowAction, FlowState, StepFlow, Steps};
use super::{FlowError, ValidationError, ensure_max_len, ensure_not_past};
use crate::messaging::whatsapp;
use crate::utils::time::long_date;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, is_blank,
};

pub const BOOKING_SUBMITTED: &str = "Booking request submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Form,
}

impl Steps for BookingStep {
    const ORDER: &'static [Self] = &[BookingStep::Form];
    const RESETTABLE: bool = true;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub date: NaiveDate,
    /// "Tuesday, October 20, 2026"
    pub date_label: String,
    pub time: TimeSlot,
    pub guests: GuestCount,
    /// "2 people"
    pub guests_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum BookingView {
    Form {
        form: BookingForm,
        time_slots: Vec<TimeSlot>,
        /// Earliest selectable date
        min_date: NaiveDate,
    },
    Confirmation(BookingConfirmation),
}

#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    flow: StepFlow<BookingStep>,
    form: BookingForm,
    confirmation: Option<BookingConfirmation>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState<BookingStep> {
        self.flow.state()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn view(&self, today: NaiveDate) -> BookingView {
        match &self.confirmation {
            Some(confirmation) => BookingView::Confirmation(confirmation.clone()),
            None => BookingView::Form {
                form: self.form.clone(),
                time_slots: TimeSlot::all(),
                min_date: today,
            },
        }
    }

    pub fn update_form(&mut self, form: BookingForm) -> Result<(), FlowError> {
        if self.flow.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        ensure_max_len(&form.name, "name", MAX_NAME_LEN)?;
        ensure_max_len(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        ensure_max_len(&form.email, "email", MAX_EMAIL_LEN)?;
        ensure_max_len(&form.special_requests, "special_requests", MAX_NOTE_LEN)?;
        self.form = form;
        Ok(())
    }

    /// Submit the booking request
    ///
    /// Name, phone, date and time are required; the date may not be
    /// before `today`.
    pub fn submit(&mut self, today: NaiveDate) -> Result<BookingConfirmation, FlowError> {
        if self.flow.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }

        let form = &self.form;
        let mut missing = Vec::new();
        if is_blank(&form.name) {
            missing.push("name");
        }
        if is_blank(&form.phone) {
            missing.push("phone");
        }
        if form.date.is_none() {
            missing.push("date");
        }
        if form.time.is_none() {
            missing.push("time");
        }
        let (date, time) = match (form.date, form.time) {
            (Some(date), Some(time)) if missing.is_empty() => (date, time),
            _ => return Err(ValidationError::MissingFields(missing).into()),
        };
        ensure_not_past(date, today)?;

        let confirmation = BookingConfirmation {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: non_blank(&form.email),
            date,
            date_label: long_date(date),
            time,
            guests: form.guests,
            guests_label: form.guests.label(),
            special_requests: non_blank(&form.special_requests),
        };

        self.flow.apply(FlowAction::Submit)?;
        tracing::info!(
            date = %date,
            time = %time,
            guests = %form.guests,
            "Booking request submitted"
        );

        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    /// Back to the form; the entered values are kept
    pub fn reset(&mut self) -> Result<FlowState<BookingStep>, FlowError> {
        let state = self.flow.apply(FlowAction::Reset)?;
        self.confirmation = None;
        Ok(state)
    }

    /// WhatsApp deep link for the current form
    ///
    /// Does not validate or change the flow state.
    pub fn whatsapp_link(&self, number: &str) -> String {
        whatsapp::booking_request_link(number, &self.form)
    }
}

fn non_blank(value: &str) -> Option<String> {
    Some(value.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
