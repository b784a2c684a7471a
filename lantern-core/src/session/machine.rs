//! Session state machine
//!
//! Outputs are driven only while Active. There is no terminal state.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Sleeping, outputs off
    #[default]
    Idle,
    /// Effect running, outputs driven
    Active,
}

/// Events that trigger session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// The wake source ended the idle sleep
    Woken,
    /// The breathing effect reported completion
    EffectComplete,
}

impl SessionState {
    /// Check if this state allows the lantern and interior light to be on
    pub fn outputs_allowed(&self) -> bool {
        matches!(self, SessionState::Active)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            (Idle, Woken) => Active,
            (Active, EffectComplete) => Idle,

            // A wake while Active has no effect; the session runs to completion
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let idle = SessionState::default();
        assert_eq!(idle, SessionState::Idle);

        let active = idle.transition(SessionEvent::Woken);
        assert_eq!(active, SessionState::Active);

        let idle = active.transition(SessionEvent::EffectComplete);
        assert_eq!(idle, SessionState::Idle);
    }

    #[test]
    fn test_wake_while_active_is_ignored() {
        let active = SessionState::Active;
        assert_eq!(active.transition(SessionEvent::Woken), SessionState::Active);
    }

    #[test]
    fn test_completion_while_idle_is_ignored() {
        let idle = SessionState::Idle;
        assert_eq!(
            idle.transition(SessionEvent::EffectComplete),
            SessionState::Idle
        );
    }

    #[test]
    fn test_outputs_allowed() {
        assert!(SessionState::Active.outputs_allowed());
        assert!(!SessionState::Idle.outputs_allowed());
    }
}
