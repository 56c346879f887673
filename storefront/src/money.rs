//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` (catalog, wire format). Every sum and product is
//! done in `Decimal` and rounded back to two places, so 14.99 × 2 is 29.98
//! and not 29.979999999999997.

use rust_decimal::prelude::*;
use shared::models::{CartLineItem, OrderItem, PricedLine};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for serialization, rounded to 2 places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price × quantity`
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Sum of `price × quantity` over cart lines
pub fn cart_total(items: &[CartLineItem]) -> f64 {
    to_f64(
        items
            .iter()
            .map(|item| line_total(item.price, item.quantity))
            .sum(),
    )
}

/// Sum of `price × quantity` over a pre-order selection
pub fn selection_total(items: &[OrderItem]) -> f64 {
    to_f64(
        items
            .iter()
            .map(|item| line_total(item.price, item.quantity))
            .sum(),
    )
}

/// Confirmation lines for cart items
pub fn price_cart_lines(items: &[CartLineItem]) -> Vec<PricedLine> {
    items
        .iter()
        .map(|item| PricedLine {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            line_total: to_f64(line_total(item.price, item.quantity)),
        })
        .collect()
}

/// Confirmation lines for a pre-order selection
pub fn price_selection(items: &[OrderItem]) -> Vec<PricedLine> {
    items
        .iter()
        .map(|item| PricedLine {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            line_total: to_f64(line_total(item.price, item.quantity)),
        })
        .collect()
}
