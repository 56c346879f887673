//! Linear step-flow state machine shared by the checkout wizards
//!
//! ```text
//! Step(0) ──Continue──▶ Step(1) ──Continue──▶ ... ──▶ Step(last) ──Submit──▶ Submitted
//!    ▲                     │                                                   │
//!    └────────Back─────────┘                         Reset (resettable flows) ─┘─▶ Step(0)
//! ```
//!
//! The machine only checks that a transition is legal for the current
//! state. Field validation ("guards") is done by each flow before it
//! applies the transition.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::FlowError;

/// Step type of one wizard
pub trait Steps: Copy + Eq + Debug + Serialize + 'static {
    /// Form steps in order; the flow is submitted from the last one
    const ORDER: &'static [Self];

    /// Whether `Reset` may return a submitted flow to the first step
    const RESETTABLE: bool = false;
}

/// Position of a wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "step", rename_all = "snake_case")]
pub enum FlowState<S> {
    Step(S),
    Submitted,
}

/// Transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowAction {
    Continue,
    Back,
    Submit,
    Reset,
}

impl FlowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Back => "back",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFlow<S: Steps> {
    state: FlowState<S>,
}

impl<S: Steps> StepFlow<S> {
    /// Start at the first step
    pub fn new() -> Self {
        Self {
            state: FlowState::Step(S::ORDER[0]),
        }
    }

    pub fn state(&self) -> FlowState<S> {
        self.state
    }

    pub fn current_step(&self) -> Option<S> {
        match self.state {
            FlowState::Step(s) => Some(s),
            FlowState::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FlowState::Submitted
    }

    /// 1-based step number, `None` once submitted
    pub fn step_number(&self) -> Option<usize> {
        self.current_step().and_then(Self::index_of).map(|i| i + 1)
    }

    /// Apply a transition and return the new state
    pub fn apply(&mut self, action: FlowAction) -> Result<FlowState<S>, FlowError> {
        let next = self.next_state(action)?;
        tracing::debug!(
            action = action.as_str(),
            from = ?self.state,
            to = ?next,
            "Flow transition"
        );
        self.state = next;
        Ok(next)
    }

    fn next_state(&self, action: FlowAction) -> Result<FlowState<S>, FlowError> {
        let last = S::ORDER.len() - 1;
        match (self.state, action) {
            (FlowState::Submitted, FlowAction::Reset) if S::RESETTABLE => {
                Ok(FlowState::Step(S::ORDER[0]))
            }
            (FlowState::Submitted, _) => Err(FlowError::AlreadySubmitted),
            (FlowState::Step(step), action) => {
                let idx = Self::index_of(step).unwrap_or(0);
                match action {
                    FlowAction::Continue if idx < last => Ok(FlowState::Step(S::ORDER[idx + 1])),
                    FlowAction::Back if idx > 0 => Ok(FlowState::Step(S::ORDER[idx - 1])),
                    FlowAction::Submit if idx == last => Ok(FlowState::Submitted),
                    _ => Err(FlowError::InvalidTransition {
                        action,
                        from: format!("{:?}", step),
                    }),
                }
            }
        }
    }

    fn index_of(step: S) -> Option<usize> {
        S::ORDER.iter().position(|s| *s == step)
    }
}

impl<S: Steps> Default for StepFlow<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    enum Three {
        A,
        B,
        C,
    }

    impl Steps for Three {
        const ORDER: &'static [Self] = &[Three::A, Three::B, Three::C];
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    enum Single {
        Form,
    }

    impl Steps for Single {
        const ORDER: &'static [Self] = &[Single::Form];
        const RESETTABLE: bool = true;
    }

    #[test]
    fn test_forward_and_back() {
        let mut flow = StepFlow::<Three>::new();
        assert_eq!(flow.step_number(), Some(1));
        flow.apply(FlowAction::Continue).unwrap();
        flow.apply(FlowAction::Continue).unwrap();
        assert_eq!(flow.current_step(), Some(Three::C));
        flow.apply(FlowAction::Back).unwrap();
        assert_eq!(flow.current_step(), Some(Three::B));
    }

    #[test]
    fn test_illegal_transitions() {
        let mut flow = StepFlow::<Three>::new();
        assert!(matches!(
            flow.apply(FlowAction::Back),
            Err(FlowError::InvalidTransition { .. })
        ));
        assert!(matches!(
            flow.apply(FlowAction::Submit),
            Err(FlowError::InvalidTransition { .. })
        ));
        flow.apply(FlowAction::Continue).unwrap();
        flow.apply(FlowAction::Continue).unwrap();
        assert!(matches!(
            flow.apply(FlowAction::Continue),
            Err(FlowError::InvalidTransition { .. })
        ));
        // Failed transitions leave the state alone
        assert_eq!(flow.current_step(), Some(Three::C));
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut flow = StepFlow::<Three>::new();
        flow.apply(FlowAction::Continue).unwrap();
        flow.apply(FlowAction::Continue).unwrap();
        assert_eq!(flow.apply(FlowAction::Submit).unwrap(), FlowState::Submitted);
        assert!(flow.is_submitted());
        assert_eq!(flow.step_number(), None);
        for action in [
            FlowAction::Continue,
            FlowAction::Back,
            FlowAction::Submit,
            FlowAction::Reset,
        ] {
            assert!(matches!(flow.apply(action), Err(FlowError::AlreadySubmitted)));
        }
    }

    #[test]
    fn test_resettable_flow() {
        let mut flow = StepFlow::<Single>::new();
        flow.apply(FlowAction::Submit).unwrap();
        assert_eq!(
            flow.apply(FlowAction::Reset).unwrap(),
            FlowState::Step(Single::Form)
        );
    }

    #[test]
    fn test_state_wire_format() {
        let json = serde_json::to_value(FlowState::Step(Three::B)).unwrap();
        assert_eq!(json, serde_json::json!({"state": "step", "step": "B"}));
        let json = serde_json::to_value(FlowState::<Three>::Submitted).unwrap();
        assert_eq!(json, serde_json::json!({"state": "submitted"}));
    }
}
