//! WhatsApp deep links (`https://wa.me/<number>?text=<message>`)

use shared::models::BookingForm;

const WA_BASE_URL: &str = "https://wa.me";

/// Plain-text booking request
///
/// Fields are taken as entered; an unset date or time is left empty and
/// blank special requests read "None".
pub fn booking_message(form: &BookingForm) -> String {
    let date = form.date.map(|d| d.to_string()).unwrap_or_default();
    let time = form.time.map(|t| t.label()).unwrap_or_default();
    let requests = if form.special_requests.trim().is_empty() {
        "None"
    } else {
        form.special_requests.as_str()
    };

    format!(
        "Table Booking Request:\n\n\
         Name: {}\n\
         Phone: {}\n\
         Date: {}\n\
         Time: {}\n\
         Guests: {}\n\
         Special Requests: {}",
        form.name, form.phone, date, time, form.guests, requests
    )
}

/// Deep link that opens a WhatsApp chat prefilled with the booking request
///
/// The number keeps only its digits, as wa.me expects.
pub fn booking_request_link(number: &str, form: &BookingForm) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{}/{}?text={}",
        WA_BASE_URL,
        digits,
        urlencoding::encode(&booking_message(form))
    )
}
