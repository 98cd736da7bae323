//! # Confirm Button
//!
//! Submit button whose look follows a [`ConfirmButtonTransitionState`]
//! driven by the caller:
//!
//! - `Default`: normal label
//! - `Loading`: spinner, clicks ignored
//! - `Success` / `Error`: check mark or error label, held for a while and
//!   then back to the normal label
//!
//! The button never changes the transition state itself.

use dioxus::prelude::*;
use shopdash_core::ConfirmButtonTransitionState;
use std::time::Duration;

use crate::components::inputs::ButtonVariant;
use crate::intl::{common, t};

/// How long a finished state stays visible by default
pub const DEFAULT_HOLD_MS: u64 = 2000;

/// App-wide confirm button settings, provided as context by the app root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmButtonSettings {
    pub hold_ms: u64,
}

impl Default for ConfirmButtonSettings {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

// ============================================================================
// Phase
// ============================================================================

/// What the button currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmButtonPhase {
    Idle,
    Loading,
    Success,
    Error,
}

impl ConfirmButtonPhase {
    /// Resolve the phase from the caller's state and the finished state
    /// still on hold, if any
    pub fn resolve(
        state: ConfirmButtonTransitionState,
        held: Option<ConfirmButtonTransitionState>,
    ) -> Self {
        if state.is_busy() {
            return ConfirmButtonPhase::Loading;
        }
        match held {
            Some(ConfirmButtonTransitionState::Success) => ConfirmButtonPhase::Success,
            Some(ConfirmButtonTransitionState::Error) => ConfirmButtonPhase::Error,
            _ => ConfirmButtonPhase::Idle,
        }
    }

    /// Clicks are ignored in this phase
    pub fn is_busy(&self) -> bool {
        matches!(self, ConfirmButtonPhase::Loading)
    }

    fn class(&self) -> &'static str {
        match self {
            ConfirmButtonPhase::Idle | ConfirmButtonPhase::Loading => "",
            ConfirmButtonPhase::Success => "bg-emerald-600 hover:bg-emerald-600",
            ConfirmButtonPhase::Error => "bg-rose-600 hover:bg-rose-600",
        }
    }
}

// ============================================================================
// Hold
// ============================================================================

/// Keeps a finished state on display until its hold expires.
///
/// Every transition gets a new generation. An expiry only clears the held
/// state when it carries the generation of the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmHold {
    held: Option<ConfirmButtonTransitionState>,
    generation: u64,
}

impl ConfirmHold {
    /// Start holding `state` if it is a finished state
    pub fn new(state: ConfirmButtonTransitionState) -> Self {
        Self {
            held: state.is_completed().then_some(state),
            generation: 0,
        }
    }

    /// Follow a new caller state. Returns the token to expire the hold with
    /// when the state is a finished one.
    pub fn transition(&mut self, state: ConfirmButtonTransitionState) -> Option<u64> {
        self.generation = self.generation.wrapping_add(1);
        if state.is_completed() {
            self.held = Some(state);
            Some(self.generation)
        } else {
            self.held = None;
            None
        }
    }

    /// End the hold started with `token`. Returns false when a newer
    /// transition owns the display.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.held = None;
        true
    }

    /// Finished state currently on display
    pub fn held(&self) -> Option<ConfirmButtonTransitionState> {
        self.held
    }
}

/// Wait out a hold, then run `f`
pub async fn expire_after<R>(hold_ms: u64, f: impl FnOnce() -> R) -> R {
    tokio::time::sleep(Duration::from_millis(hold_ms)).await;
    f()
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmButtonProps {
    /// State driven by the caller
    pub transition_state: ConfirmButtonTransitionState,

    /// How long success/error stay visible, in milliseconds. Falls back to
    /// the `ConfirmButtonSettings` context, then to `DEFAULT_HOLD_MS`.
    #[props(default)]
    pub hold_ms: Option<u64>,

    /// Visual style
    #[props(default = ButtonVariant::Contained)]
    pub variant: ButtonVariant,

    /// Disable regardless of state
    #[props(default = false)]
    pub disabled: bool,

    /// Click handler
    #[props(default)]
    pub on_click: EventHandler<()>,

    /// Label shown in the idle phase
    pub children: Element,
}

/// Button reflecting an action's transition state
#[component]
pub fn ConfirmButton(props: ConfirmButtonProps) -> Element {
    let transition_state = props.transition_state;
    let hold_ms = props.hold_ms.unwrap_or_else(|| {
        try_consume_context::<ConfirmButtonSettings>()
            .unwrap_or_default()
            .hold_ms
    });

    let mut hold = use_signal(move || ConfirmHold::new(transition_state));

    use_effect(use_reactive!(|(transition_state, hold_ms)| {
        let token = hold.write().transition(transition_state);
        if let Some(token) = token {
            spawn(async move {
                expire_after(hold_ms, move || hold.write().expire(token)).await;
            });
        }
    }));

    let phase = ConfirmButtonPhase::resolve(transition_state, hold.read().held());
    let disabled = props.disabled || phase.is_busy();
    let variant_class = props.variant.class();
    let phase_class = phase.class();
    let error_label = t(&common::ERROR);

    rsx! {
        button {
            r#type: "button",
            class: "px-4 py-2 rounded-lg text-sm font-medium transition-colors disabled:cursor-not-allowed flex items-center gap-2 {variant_class} {phase_class}",
            disabled: disabled,
            "data-state": "{transition_state}",
            onclick: move |_| {
                if !disabled {
                    props.on_click.call(());
                }
            },

            match phase {
                ConfirmButtonPhase::Loading => rsx! {
                    span { class: "animate-spin", "⏳" }
                    span { class: "invisible", {props.children} }
                },
                ConfirmButtonPhase::Success => rsx! {
                    span { "✓" }
                },
                ConfirmButtonPhase::Error => rsx! {
                    span { "{error_label}" }
                },
                ConfirmButtonPhase::Idle => rsx! {
                    {props.children}
                },
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ConfirmButtonTransitionState as State;
    use tokio::time::Instant;

    #[test]
    fn test_loading_wins() {
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Loading, None),
            ConfirmButtonPhase::Loading
        );
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Loading, Some(State::Success)),
            ConfirmButtonPhase::Loading
        );
        assert!(ConfirmButtonPhase::Loading.is_busy());
    }

    #[test]
    fn test_finished_states_show_while_held() {
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Success, Some(State::Success)),
            ConfirmButtonPhase::Success
        );
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Error, Some(State::Error)),
            ConfirmButtonPhase::Error
        );
    }

    #[test]
    fn test_finished_states_fall_back_to_idle() {
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Success, None),
            ConfirmButtonPhase::Idle
        );
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Error, None),
            ConfirmButtonPhase::Idle
        );
        assert_eq!(
            ConfirmButtonPhase::resolve(State::Default, None),
            ConfirmButtonPhase::Idle
        );
        assert!(!ConfirmButtonPhase::Idle.is_busy());
    }

    #[test]
    fn test_hold_starts_from_initial_state() {
        assert_eq!(ConfirmHold::new(State::Success).held(), Some(State::Success));
        assert_eq!(ConfirmHold::new(State::Loading).held(), None);
    }

    #[test]
    fn test_hold_expires_after_hold_ms() {
        let mut hold = ConfirmHold::new(State::Loading);

        tokio_test::block_on(async {
            tokio::time::pause();
            let start = Instant::now();
            let token = hold.transition(State::Success).unwrap();

            let early = tokio::time::timeout(
                Duration::from_millis(DEFAULT_HOLD_MS - 1),
                expire_after(DEFAULT_HOLD_MS, || hold.expire(token)),
            )
            .await;
            assert!(early.is_err());
            assert_eq!(hold.held(), Some(State::Success));

            assert!(expire_after(1, || hold.expire(token)).await);
            assert!(start.elapsed() >= Duration::from_millis(DEFAULT_HOLD_MS));
            assert_eq!(hold.held(), None);
        });
    }

    #[test]
    fn test_newer_transition_survives_old_expiry() {
        let mut hold = ConfirmHold::new(State::Default);

        tokio_test::block_on(async {
            tokio::time::pause();
            let first = hold.transition(State::Error).unwrap();
            tokio::time::advance(Duration::from_millis(1000)).await;
            let second = hold.transition(State::Success).unwrap();

            assert!(!expire_after(1000, || hold.expire(first)).await);
            assert_eq!(hold.held(), Some(State::Success));

            assert!(expire_after(1000, || hold.expire(second)).await);
            assert_eq!(hold.held(), None);
        });
    }

    #[test]
    fn test_busy_transition_drops_hold() {
        let mut hold = ConfirmHold::new(State::Default);
        let token = hold.transition(State::Error).unwrap();

        assert_eq!(hold.transition(State::Loading), None);
        assert_eq!(hold.held(), None);
        assert!(!hold.expire(token));
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(ConfirmButtonSettings::default().hold_ms, DEFAULT_HOLD_MS);
    }

    #[test]
    fn test_phase_classes() {
        assert!(ConfirmButtonPhase::Success.class().contains("emerald"));
        assert!(ConfirmButtonPhase::Error.class().contains("rose"));
        assert!(ConfirmButtonPhase::Idle.class().is_empty());
    }
}
