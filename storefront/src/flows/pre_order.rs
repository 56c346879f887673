//! Pre-order flow
//!
//! Guests with a table booking choose their dishes in advance:
//! schedule (date + time) → items → payment. The selection is kept here
//! and never touches the shopping cart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::booking::blank_as_none;
use shared::models::{MenuItem, OrderItem, PreOrderPaymentMethod, PricedLine, TimeSlot};

use super::step::{FlowAction, FlowState, StepFlow, Steps};
use super::{FlowError, ValidationError, ensure_max_len, ensure_not_past};
use crate::cart::MAX_QUANTITY;
use crate::money;
use crate::utils::time::weekday_month_day;
use crate::utils::validation::MAX_SHORT_TEXT_LEN;

pub const PRE_ORDER_SUBMITTED: &str = "Pre-order submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreOrderStep {
    Schedule,
    Items,
    Payment,
}

impl Steps for PreOrderStep {
    const ORDER: &'static [Self] = &[
        PreOrderStep::Schedule,
        PreOrderStep::Items,
        PreOrderStep::Payment,
    ];
}

/// Step 1 input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreOrderSchedule {
    /// Existing booking reference (optional)
    #[serde(default)]
    pub booking_ref: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub time: Option<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreOrderConfirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
    pub date: NaiveDate,
    /// "Tuesday, October 20"
    pub date_label: String,
    pub time: TimeSlot,
    pub payment_method: PreOrderPaymentMethod,
    pub payment_label: String,
    pub items: Vec<PricedLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PreOrderView {
    Schedule {
        schedule: PreOrderSchedule,
        time_slots: Vec<TimeSlot>,
    },
    Items {
        items: Vec<OrderItem>,
        total: f64,
    },
    Payment {
        items: Vec<PricedLine>,
        total: f64,
        payment_method: PreOrderPaymentMethod,
    },
    Confirmation(PreOrderConfirmation),
}

#[derive(Debug, Clone, Default)]
pub struct PreOrderFlow {
    flow: StepFlow<PreOrderStep>,
    schedule: PreOrderSchedule,
    items: Vec<OrderItem>,
    payment_method: PreOrderPaymentMethod,
    confirmation: Option<PreOrderConfirmation>,
}

impl PreOrderFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState<PreOrderStep> {
        self.flow.state()
    }

    pub fn schedule(&self) -> &PreOrderSchedule {
        &self.schedule
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        money::selection_total(&self.items)
    }

    pub fn view(&self) -> PreOrderView {
        if let Some(confirmation) = &self.confirmation {
            return PreOrderView::Confirmation(confirmation.clone());
        }
        match self.flow.current_step() {
            Some(PreOrderStep::Items) => PreOrderView::Items {
                items: self.items.clone(),
                total: self.total(),
            },
            Some(PreOrderStep::Payment) => PreOrderView::Payment {
                items: money::price_selection(&self.items),
                total: self.total(),
                payment_method: self.payment_method,
            },
            _ => PreOrderView::Schedule {
                schedule: self.schedule.clone(),
                time_slots: TimeSlot::all(),
            },
        }
    }

    pub fn update_schedule(&mut self, schedule: PreOrderSchedule) -> Result<(), FlowError> {
        self.ensure_open()?;
        ensure_max_len(&schedule.booking_ref, "booking_ref", MAX_SHORT_TEXT_LEN)?;
        self.schedule = schedule;
        Ok(())
    }

    /// Add one unit of a menu item to the selection
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), FlowError> {
        self.ensure_open()?;
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(line) => line.quantity = (line.quantity + 1).min(MAX_QUANTITY),
            None => self.items.push(OrderItem::from_menu_item(item)),
        }
        Ok(())
    }

    /// Change a line by `delta`; reaching zero removes it
    ///
    /// Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<(), FlowError> {
        self.ensure_open()?;
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Ok(());
        };
        let next = i64::from(self.items[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = next.min(i64::from(MAX_QUANTITY)) as u32;
        }
        Ok(())
    }

    pub fn remove_item(&mut self, id: &str) -> Result<(), FlowError> {
        self.ensure_open()?;
        self.items.retain(|i| i.id != id);
        Ok(())
    }

    pub fn select_payment(&mut self, method: PreOrderPaymentMethod) -> Result<(), FlowError> {
        self.ensure_open()?;
        if !method.is_available() {
            return Err(FlowError::PaymentUnavailable(method.label()));
        }
        self.payment_method = method;
        Ok(())
    }

    /// Move to the next step
    ///
    /// Leaving the schedule step needs a date (not before `today`) and a
    /// time; leaving the items step needs at least one item.
    pub fn proceed(&mut self, today: NaiveDate) -> Result<FlowState<PreOrderStep>, FlowError> {
        self.ensure_open()?;
        match self.flow.current_step() {
            Some(PreOrderStep::Schedule) => {
                self.validated_schedule(today)?;
            }
            Some(PreOrderStep::Items) => self.ensure_selection()?,
            _ => {}
        }
        self.flow.apply(FlowAction::Continue)
    }

    pub fn back(&mut self) -> Result<FlowState<PreOrderStep>, FlowError> {
        self.flow.apply(FlowAction::Back)
    }

    pub fn submit(&mut self, today: NaiveDate) -> Result<PreOrderConfirmation, FlowError> {
        self.ensure_open()?;
        self.ensure_selection()?;
        let (date, time) = self.validated_schedule(today)?;

        self.flow.apply(FlowAction::Submit)?;

        let booking_ref = Some(self.schedule.booking_ref.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let confirmation = PreOrderConfirmation {
            booking_ref,
            date,
            date_label: weekday_month_day(date),
            time,
            payment_method: self.payment_method,
            payment_label: self.payment_method.label().to_string(),
            items: money::price_selection(&self.items),
            total: self.total(),
        };

        tracing::info!(
            date = %date,
            time = %time,
            items = confirmation.items.len(),
            total = confirmation.total,
            "Pre-order submitted"
        );

        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    fn validated_schedule(&self, today: NaiveDate) -> Result<(NaiveDate, TimeSlot), FlowError> {
        let (Some(date), Some(time)) = (self.schedule.date, self.schedule.time) else {
            return Err(ValidationError::MissingSchedule.into());
        };
        ensure_not_past(date, today)?;
        Ok((date, time))
    }

    fn ensure_selection(&self) -> Result<(), FlowError> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), FlowError> {
        if self.flow.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    fn scheduled_flow() -> PreOrderFlow {
        let mut flow = PreOrderFlow::new();
        flow.update_schedule(PreOrderSchedule {
            booking_ref: String::new(),
            date: Some(tomorrow()),
            time: "7:00 PM".parse().ok(),
        })
        .unwrap();
        flow.proceed(today()).unwrap();
        flow
    }

    fn item(id: &str) -> MenuItem {
        Catalog::urban_plate().get_item_by_id(id).cloned().unwrap()
    }

    #[test]
    fn test_schedule_required() {
        let mut flow = PreOrderFlow::new();
        assert_eq!(
            flow.proceed(today()),
            Err(FlowError::Validation(ValidationError::MissingSchedule))
        );

        flow.update_schedule(PreOrderSchedule {
            date: Some(tomorrow()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            flow.proceed(today()),
            Err(FlowError::Validation(ValidationError::MissingSchedule))
        );
        assert_eq!(flow.state(), FlowState::Step(PreOrderStep::Schedule));
    }

    #[test]
    fn test_past_date_rejected() {
        let mut flow = PreOrderFlow::new();
        flow.update_schedule(PreOrderSchedule {
            booking_ref: String::new(),
            date: today().pred_opt(),
            time: "7:00 PM".parse().ok(),
        })
        .unwrap();
        assert!(matches!(
            flow.proceed(today()),
            Err(FlowError::Validation(ValidationError::DateInPast { .. }))
        ));
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut flow = scheduled_flow();
        flow.add_item(&item("d1")).unwrap();
        flow.add_item(&item("d1")).unwrap();
        flow.add_item(&item("b2")).unwrap();

        flow.adjust_quantity("d1", -1).unwrap();
        assert_eq!(flow.items()[0].quantity, 1);
        flow.adjust_quantity("d1", -1).unwrap();
        let ids: Vec<&str> = flow.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b2"]);

        // Unknown id
        flow.adjust_quantity("d1", 1).unwrap();
        assert_eq!(flow.items().len(), 1);
    }

    #[test]
    fn test_extreme_delta_is_clamped() {
        let mut flow = scheduled_flow();
        flow.add_item(&item("d1")).unwrap();
        flow.add_item(&item("b2")).unwrap();

        flow.adjust_quantity("d1", i64::MAX).unwrap();
        assert_eq!(flow.items()[0].quantity, MAX_QUANTITY);
        flow.adjust_quantity("d1", i64::MAX).unwrap();
        assert_eq!(flow.items()[0].quantity, MAX_QUANTITY);

        flow.adjust_quantity("b2", i64::MIN).unwrap();
        let ids: Vec<&str> = flow.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["d1"]);
    }

    #[test]
    fn test_items_step_needs_selection() {
        let mut flow = scheduled_flow();
        assert_eq!(
            flow.proceed(today()),
            Err(FlowError::Validation(ValidationError::EmptySelection))
        );
        flow.add_item(&item("m3")).unwrap();
        assert_eq!(
            flow.proceed(today()).unwrap(),
            FlowState::Step(PreOrderStep::Payment)
        );
    }

    #[test]
    fn test_submit_confirmation() {
        let mut flow = scheduled_flow();
        flow.add_item(&item("m3")).unwrap();
        flow.add_item(&item("d3")).unwrap();
        flow.adjust_quantity("d3", 1).unwrap();
        flow.proceed(today()).unwrap();

        let confirmation = flow.submit(today()).unwrap();
        assert_eq!(confirmation.date_label, "Tuesday, October 20");
        assert_eq!(confirmation.time.label(), "7:00 PM");
        assert_eq!(confirmation.payment_label, "Pay at Restaurant");
        assert_eq!(confirmation.booking_ref, None);
        // 38.99 + 2 × 11.99
        assert_eq!(confirmation.total, 62.97);
        assert_eq!(confirmation.items[1].line_total, 23.98);
        assert!(matches!(flow.view(), PreOrderView::Confirmation(_)));
    }

    #[test]
    fn test_submit_keeps_booking_ref() {
        let mut flow = PreOrderFlow::new();
        flow.update_schedule(PreOrderSchedule {
            booking_ref: " BK-42 ".into(),
            date: Some(tomorrow()),
            time: "5:30 PM".parse().ok(),
        })
        .unwrap();
        flow.proceed(today()).unwrap();
        flow.add_item(&item("s4")).unwrap();
        flow.proceed(today()).unwrap();
        let confirmation = flow.submit(today()).unwrap();
        assert_eq!(confirmation.booking_ref.as_deref(), Some("BK-42"));
    }

    #[test]
    fn test_submit_only_from_payment_step() {
        let mut flow = scheduled_flow();
        flow.add_item(&item("m3")).unwrap();
        assert!(matches!(
            flow.submit(today()),
            Err(FlowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_removing_everything_blocks_submit() {
        let mut flow = scheduled_flow();
        flow.add_item(&item("m3")).unwrap();
        flow.proceed(today()).unwrap();
        flow.remove_item("m3").unwrap();
        assert_eq!(
            flow.submit(today()),
            Err(FlowError::Validation(ValidationError::EmptySelection))
        );
    }

    #[test]
    fn test_pay_online_is_placeholder() {
        let mut flow = PreOrderFlow::new();
        assert_eq!(
            flow.select_payment(PreOrderPaymentMethod::PayOnline),
            Err(FlowError::PaymentUnavailable("Paid Online"))
        );
    }

    #[test]
    fn test_schedule_view_lists_slots() {
        match PreOrderFlow::new().view() {
            PreOrderView::Schedule { time_slots, .. } => assert_eq!(time_slots.len(), 10),
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
