//! Booking Model
//!
//! Table booking form, time slots and guest counts.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// First bookable slot (17:00)
const FIRST_SLOT_HOUR: u32 = 17;
/// Number of half-hour slots (17:00 .. 21:30)
const SLOT_COUNT: u32 = 10;

/// Half-hour slot offered for booking and pre-order
///
/// Serialized as its label, e.g. `"6:00 PM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// The fixed slot list, 5:00 PM to 9:30 PM
    pub fn all() -> Vec<TimeSlot> {
        (0..SLOT_COUNT)
            .filter_map(|i| {
                let minutes = FIRST_SLOT_HOUR * 60 + i * 30;
                NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
            })
            .map(TimeSlot)
            .collect()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Display label ("5:00 PM")
    pub fn label(&self) -> String {
        let (is_pm, hour) = self.0.hour12();
        format!(
            "{}:{:02} {}",
            hour,
            self.0.minute(),
            if is_pm { "PM" } else { "AM" }
        )
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error for labels that are not one of the offered slots
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an available time slot")]
pub struct InvalidTimeSlot(pub String);

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeSlot::all()
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidTimeSlot(s.to_string()))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Party size: 1-10, or the "10+" sentinel meaning "contact us"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCount {
    Exact(u8),
    TenPlus,
}

impl GuestCount {
    pub const MAX_EXACT: u8 = 10;

    /// "1 person", "4 people", "10+ people"
    pub fn label(&self) -> String {
        match self {
            Self::Exact(1) => "1 person".to_string(),
            Self::Exact(n) => format!("{} people", n),
            Self::TenPlus => "10+ people".to_string(),
        }
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self::Exact(2)
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::TenPlus => f.write_str("10+"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("guest count must be 1-10 or \"10+\", got '{0}'")]
pub struct InvalidGuestCount(pub String);

impl FromStr for GuestCount {
    type Err = InvalidGuestCount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw == "10+" {
            return Ok(Self::TenPlus);
        }
        match raw.parse::<u8>() {
            Ok(n) if (1..=Self::MAX_EXACT).contains(&n) => Ok(Self::Exact(n)),
            _ => Err(InvalidGuestCount(s.to_string())),
        }
    }
}

impl Serialize for GuestCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts the select value (`"4"`, `"10+"`) or a bare number (`4`)
impl<'de> Deserialize<'de> for GuestCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GuestCountVisitor)
    }
}

struct GuestCountVisitor;

impl<'de> Visitor<'de> for GuestCountVisitor {
    type Value = GuestCount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a guest count from 1 to 10, or \"10+\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<GuestCount, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<GuestCount, E> {
        u8::try_from(v)
            .ok()
            .filter(|n| (1..=GuestCount::MAX_EXACT).contains(n))
            .map(GuestCount::Exact)
            .ok_or_else(|| E::custom(InvalidGuestCount(v.to_string())))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<GuestCount, E> {
        match u64::try_from(v) {
            Ok(n) => self.visit_u64(n),
            Err(_) => Err(E::custom(InvalidGuestCount(v.to_string()))),
        }
    }
}

/// Optional field sent by a form input
///
/// `null`, a missing key and a blank string all mean "not filled in";
/// anything else must parse.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Table booking form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Optional contact email
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub time: Option<TimeSlot>,
    #[serde(default)]
    pub guests: GuestCount,
    #[serde(default)]
    pub special_requests: String,
}
