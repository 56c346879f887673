//! Delivery order flow
//!
//! Step 1 collects delivery details, step 2 the payment method. Submitting
//! turns the current cart into a confirmation and clears the cart.

use serde::{Deserialize, Serialize};
use shared::models::{DeliveryInfo, DeliveryPaymentMethod, PricedLine};
use shared::util::snowflake_id;

use super::step::{FlowAction, FlowState, StepFlow, Steps};
use super::{FlowError, ValidationError, ensure_max_len};
use crate::cart::CartStore;
use crate::money;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, missing_fields,
};

pub const ORDER_PLACED: &str = "Order placed successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStep {
    Details,
    Payment,
}

impl Steps for DeliveryStep {
    const ORDER: &'static [Self] = &[DeliveryStep::Details, DeliveryStep::Payment];
}

/// Snapshot of a placed delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfirmation {
    /// Order reference (snowflake id)
    pub reference: i64,
    pub info: DeliveryInfo,
    pub payment_method: DeliveryPaymentMethod,
    pub payment_label: String,
    pub items: Vec<PricedLine>,
    pub total_items: u32,
    pub total: f64,
}

/// What the delivery page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DeliveryView {
    /// Cart is empty on the details step
    EmptyCart,
    Details {
        info: DeliveryInfo,
    },
    Payment {
        info: DeliveryInfo,
        payment_method: DeliveryPaymentMethod,
        total_items: u32,
        total: f64,
    },
    Confirmation(DeliveryConfirmation),
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryFlow {
    flow: StepFlow<DeliveryStep>,
    info: DeliveryInfo,
    payment_method: DeliveryPaymentMethod,
    confirmation: Option<DeliveryConfirmation>,
}

impl DeliveryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState<DeliveryStep> {
        self.flow.state()
    }

    pub fn info(&self) -> &DeliveryInfo {
        &self.info
    }

    pub fn payment_method(&self) -> DeliveryPaymentMethod {
        self.payment_method
    }

    pub fn confirmation(&self) -> Option<&DeliveryConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn view(&self, cart: &CartStore) -> DeliveryView {
        if let Some(confirmation) = &self.confirmation {
            return DeliveryView::Confirmation(confirmation.clone());
        }
        match self.flow.current_step() {
            Some(DeliveryStep::Details) if cart.is_empty() => DeliveryView::EmptyCart,
            Some(DeliveryStep::Payment) => DeliveryView::Payment {
                info: self.info.clone(),
                payment_method: self.payment_method,
                total_items: cart.total_items(),
                total: cart.total_price(),
            },
            _ => DeliveryView::Details {
                info: self.info.clone(),
            },
        }
    }

    /// Start over after a placed order once the cart has been refilled
    ///
    /// Returns whether the flow was restarted. While the cart is still
    /// empty the confirmation stays visible.
    pub fn enter(&mut self, cart: &CartStore) -> bool {
        if !self.flow.is_submitted() || cart.is_empty() {
            return false;
        }
        tracing::debug!("Delivery flow restarted for a new order");
        *self = Self::new();
        true
    }

    /// Replace the delivery details
    ///
    /// Blank fields are accepted here; they are checked on submit.
    pub fn update_details(&mut self, info: DeliveryInfo) -> Result<(), FlowError> {
        self.ensure_open()?;
        ensure_max_len(&info.name, "name", MAX_NAME_LEN)?;
        ensure_max_len(&info.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        ensure_max_len(&info.address, "address", MAX_ADDRESS_LEN)?;
        ensure_max_len(&info.notes, "notes", MAX_NOTE_LEN)?;
        self.info = info;
        Ok(())
    }

    pub fn select_payment(&mut self, method: DeliveryPaymentMethod) -> Result<(), FlowError> {
        self.ensure_open()?;
        if !method.is_available() {
            return Err(FlowError::PaymentUnavailable(method.label()));
        }
        self.payment_method = method;
        Ok(())
    }

    /// Details → payment
    pub fn proceed(&mut self, cart: &CartStore) -> Result<FlowState<DeliveryStep>, FlowError> {
        self.ensure_open()?;
        if cart.is_empty() {
            return Err(FlowError::CartEmpty);
        }
        self.flow.apply(FlowAction::Continue)
    }

    /// Payment → details
    pub fn back(&mut self) -> Result<FlowState<DeliveryStep>, FlowError> {
        self.flow.apply(FlowAction::Back)
    }

    /// Place the order
    ///
    /// Requires name, phone and address. On success the cart is cleared and
    /// the confirmation keeps the lines and total as they were.
    pub fn submit(&mut self, cart: &mut CartStore) -> Result<DeliveryConfirmation, FlowError> {
        self.ensure_open()?;
        if cart.is_empty() {
            return Err(FlowError::CartEmpty);
        }

        let missing = missing_fields(&[
            ("name", self.info.name.as_str()),
            ("phone", self.info.phone.as_str()),
            ("address", self.info.address.as_str()),
        ]);
        if !missing.is_empty() {
            tracing::info!(missing = ?missing, "Delivery order rejected: missing fields");
            return Err(ValidationError::MissingFields(missing).into());
        }

        self.flow.apply(FlowAction::Submit)?;

        let confirmation = DeliveryConfirmation {
            reference: snowflake_id(),
            info: self.info.clone(),
            payment_method: self.payment_method,
            payment_label: self.payment_method.label().to_string(),
            items: money::price_cart_lines(cart.items()),
            total_items: cart.total_items(),
            total: cart.total_price(),
        };
        cart.clear_cart();

        tracing::info!(
            reference = confirmation.reference,
            total_items = confirmation.total_items,
            total = confirmation.total,
            payment = confirmation.payment_label.as_str(),
            "Delivery order placed"
        );

        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    fn ensure_open(&self) -> Result<(), FlowError> {
        if self.flow.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        Ok(())
    }
}
