//! States a registration run moves through.

use std::fmt;

use crate::domain::registration_error::RegistrationErrorKind;

/// Position of a registration run in its pipeline.
///
/// `Validating` is initial; `Succeeded` and `Failed` are terminal.
///
/// # Examples
/// ```
/// use registration::domain::RegistrationState;
///
/// let state = RegistrationState::Validating.advance().advance().advance();
/// assert_eq!(state, RegistrationState::Succeeded);
/// assert!(state.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationState {
    /// The validator is checking the record.
    Validating,
    /// The persistence gateway is saving the record.
    Persisting,
    /// The notification gateway is sending the welcome message.
    Notifying,
    /// Every stage completed.
    Succeeded,
    /// A stage failed with the given kind.
    Failed(RegistrationErrorKind),
}

impl RegistrationState {
    /// State reached when the current stage completes successfully.
    ///
    /// Terminal states are returned unchanged.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Validating => Self::Persisting,
            Self::Persisting => Self::Notifying,
            Self::Notifying | Self::Succeeded => Self::Succeeded,
            Self::Failed(kind) => Self::Failed(kind),
        }
    }

    /// State reached when the current stage fails.
    ///
    /// Terminal states are returned unchanged so a finished run cannot be
    /// reclassified.
    #[must_use]
    pub const fn fail(self, kind: RegistrationErrorKind) -> Self {
        if self.is_terminal() {
            self
        } else {
            Self::Failed(kind)
        }
    }

    /// Whether the run has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    /// Short stage name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Persisting => "persisting",
            Self::Notifying => "notifying",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(kind) => write!(f, "failed({kind})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RegistrationState::Validating, RegistrationState::Persisting)]
    #[case(RegistrationState::Persisting, RegistrationState::Notifying)]
    #[case(RegistrationState::Notifying, RegistrationState::Succeeded)]
    #[case(RegistrationState::Succeeded, RegistrationState::Succeeded)]
    #[case(
        RegistrationState::Failed(RegistrationErrorKind::Unexpected),
        RegistrationState::Failed(RegistrationErrorKind::Unexpected)
    )]
    fn advance_follows_stage_order(
        #[case] from: RegistrationState,
        #[case] expected: RegistrationState,
    ) {
        assert_eq!(from.advance(), expected);
    }

    #[rstest]
    #[case(RegistrationState::Validating)]
    #[case(RegistrationState::Persisting)]
    #[case(RegistrationState::Notifying)]
    fn any_running_stage_can_fail(#[case] from: RegistrationState) {
        let failed = from.fail(RegistrationErrorKind::PersistenceFailure);
        assert_eq!(
            failed,
            RegistrationState::Failed(RegistrationErrorKind::PersistenceFailure)
        );
        assert!(failed.is_terminal());
    }

    #[rstest]
    fn terminal_states_ignore_failures() {
        let done = RegistrationState::Succeeded.fail(RegistrationErrorKind::Unexpected);
        assert_eq!(done, RegistrationState::Succeeded);

        let failed = RegistrationState::Failed(RegistrationErrorKind::InvalidInput)
            .fail(RegistrationErrorKind::Unexpected);
        assert_eq!(
            failed,
            RegistrationState::Failed(RegistrationErrorKind::InvalidInput)
        );
    }

    #[rstest]
    fn display_includes_failure_kind() {
        let state = RegistrationState::Failed(RegistrationErrorKind::NotificationFailure);
        assert_eq!(state.to_string(), "failed(notification_failure)");
        assert_eq!(RegistrationState::Persisting.to_string(), "persisting");
    }
}
