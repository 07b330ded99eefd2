//! Mutation-state tracking for forms.
//!
//! Every mutating action moves through idle → pending → settled rather than
//! flipping a boolean, so rapid repeated submissions cannot race past each
//! other: [`ActionState::begin`] refuses to start while a submission is in
//! flight, and a failure keeps the form open with its entered values.

/// Lifecycle of one mutating form action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Settled(Result<(), String>),
}

impl ActionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionState::Pending)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, ActionState::Settled(Ok(())))
    }

    /// Failure message of the last settled attempt, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            ActionState::Settled(Err(message)) => Some(message),
            _ => None,
        }
    }

    /// Move to `Pending`. Returns `false` (and stays put) when a submission
    /// is already in flight; callers bail out instead of double-submitting.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionState::Pending;
        true
    }

    /// Settle the in-flight submission.
    pub fn finish(&mut self, result: Result<(), String>) {
        *self = ActionState::Settled(result);
    }

    /// Back to `Idle`, e.g. when the operator edits the form after a failure.
    pub fn reset(&mut self) {
        *self = ActionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_refuses_double_submission() {
        let mut state = ActionState::default();
        assert!(state.begin());
        assert!(state.is_pending());
        assert!(!state.begin(), "second submit while pending must be refused");
    }

    #[test]
    fn test_failure_keeps_message_until_reset() {
        let mut state = ActionState::default();
        assert!(state.begin());
        state.finish(Err("backend rejected".into()));
        assert_eq!(state.error(), Some("backend rejected"));
        assert!(!state.is_pending());

        state.reset();
        assert_eq!(state, ActionState::Idle);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resubmit_after_settle_is_allowed() {
        let mut state = ActionState::default();
        assert!(state.begin());
        state.finish(Ok(()));
        assert!(state.succeeded());
        assert!(state.begin());
    }
}
