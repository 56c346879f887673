//! Outbound messaging links

pub mod whatsapp;

pub use whatsapp::{booking_message, booking_request_link};
