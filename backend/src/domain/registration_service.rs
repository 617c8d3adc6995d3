//! Registration orchestrator.
//!
//! Runs validation, persistence and notification strictly in that order for
//! one record and classifies whatever goes wrong into a single
//! [`RegistrationError`]. The two gateway calls are the only suspension
//! points. Nothing is retried and a completed stage is never undone: a record
//! saved before a notification failure stays saved.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{AccountRegistration, AccountRepository, WelcomeNotifier};
use crate::domain::{
    RecordValidator, RegistrationError, RegistrationErrorKind, RegistrationReceipt,
    RegistrationRecord, RegistrationState, StandardRecordValidator, TraceId,
};

const PANIC_FALLBACK_MESSAGE: &str = "registration stage panicked";

/// Render the single outcome line for a finished run.
///
/// # Examples
/// ```
/// use registration::domain::{RegistrationError, report_line};
///
/// let result = Err(RegistrationError::invalid_input("Invalid email format."));
/// assert_eq!(report_line(&result), "Validation Error: Invalid email format.");
/// ```
pub fn report_line(result: &Result<RegistrationReceipt, RegistrationError>) -> String {
    match result {
        Ok(receipt) => receipt.report_line().to_owned(),
        Err(error) => error.report_line(),
    }
}

/// Registration service implementing the [`AccountRegistration`] port.
///
/// The service holds no mutable state, so one instance can serve concurrent
/// registrations for different records.
pub struct RegistrationService<R, N, V = StandardRecordValidator> {
    accounts: Arc<R>,
    notifier: Arc<N>,
    validator: V,
}

impl<R, N> RegistrationService<R, N> {
    /// Create a service using the standard validation rules.
    pub fn new(accounts: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            accounts,
            notifier,
            validator: StandardRecordValidator,
        }
    }
}

impl<R, N, V> RegistrationService<R, N, V> {
    /// Replace the validation stage.
    pub fn with_validator<W>(self, validator: W) -> RegistrationService<R, N, W> {
        RegistrationService {
            accounts: self.accounts,
            notifier: self.notifier,
            validator,
        }
    }
}

impl<R, N, V> RegistrationService<R, N, V>
where
    R: AccountRepository,
    N: WelcomeNotifier,
    V: RecordValidator,
{
    /// Run the pipeline for `record` and return its terminal outcome.
    ///
    /// A panic inside a gateway call counts as that gateway failing. Any
    /// other panic is caught here and reported as
    /// [`RegistrationError::Unexpected`].
    pub async fn register(
        &self,
        record: &RegistrationRecord,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        let result = AssertUnwindSafe(self.run_stages(record))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(RegistrationError::unexpected(panic_message(payload.as_ref())))
            });
        log_outcome(record, &result);
        result
    }

    async fn run_stages(
        &self,
        record: &RegistrationRecord,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        let mut state = RegistrationState::Validating;
        while !state.is_terminal() {
            if let Err(error) = self.run_stage(state, record).await {
                debug!(
                    from = %state,
                    to = %state.fail(error.kind()),
                    username = record.username(),
                    "registration stage failed"
                );
                return Err(error);
            }
            let next = state.advance();
            debug!(
                from = %state,
                to = %next,
                username = record.username(),
                "registration stage completed"
            );
            state = next;
        }
        Ok(RegistrationReceipt::for_record(record))
    }

    async fn run_stage(
        &self,
        state: RegistrationState,
        record: &RegistrationRecord,
    ) -> Result<(), RegistrationError> {
        match state {
            RegistrationState::Validating => {
                self.validator.validate(record).map_err(classify_validation_error)
            }
            RegistrationState::Persisting => self.persist(record).await,
            RegistrationState::Notifying => self.notify(record).await,
            RegistrationState::Succeeded | RegistrationState::Failed(_) => Ok(()),
        }
    }

    async fn persist(&self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        let outcome = AssertUnwindSafe(async { self.accounts.save(record).await })
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                debug!(
                    gateway_error = err.code(),
                    detail = %err,
                    username = record.username(),
                    "account repository rejected registration"
                );
                Err(RegistrationError::persistence_failure())
            }
            Err(payload) => {
                debug!(
                    detail = %panic_message(payload.as_ref()),
                    username = record.username(),
                    "account repository panicked"
                );
                Err(RegistrationError::persistence_failure())
            }
        }
    }

    async fn notify(&self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        let outcome = AssertUnwindSafe(async { self.notifier.send_welcome(record).await })
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                debug!(
                    gateway_error = err.code(),
                    detail = %err,
                    username = record.username(),
                    "welcome notifier failed; account remains persisted"
                );
                Err(RegistrationError::notification_failure())
            }
            Err(payload) => {
                debug!(
                    detail = %panic_message(payload.as_ref()),
                    username = record.username(),
                    "welcome notifier panicked; account remains persisted"
                );
                Err(RegistrationError::notification_failure())
            }
        }
    }
}

#[async_trait]
impl<R, N, V> AccountRegistration for RegistrationService<R, N, V>
where
    R: AccountRepository,
    N: WelcomeNotifier,
    V: RecordValidator,
{
    async fn register(
        &self,
        record: &RegistrationRecord,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        RegistrationService::register(self, record).await
    }
}

/// Validation may only yield `InvalidInput` or `Unexpected`; gateway kinds
/// belong to the gateway stages.
fn classify_validation_error(error: RegistrationError) -> RegistrationError {
    match error.kind() {
        RegistrationErrorKind::InvalidInput | RegistrationErrorKind::Unexpected => error,
        RegistrationErrorKind::PersistenceFailure | RegistrationErrorKind::NotificationFailure => {
            RegistrationError::unexpected(error.message())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        PANIC_FALLBACK_MESSAGE.to_owned()
    }
}

fn log_outcome(
    record: &RegistrationRecord,
    result: &Result<RegistrationReceipt, RegistrationError>,
) {
    let trace_id = TraceId::current_label();
    let line = report_line(result);
    match result {
        Ok(_) => info!(%trace_id, username = record.username(), "{line}"),
        Err(err) if err.kind() == RegistrationErrorKind::Unexpected => error!(
            %trace_id,
            username = record.username(),
            kind = %err.kind(),
            "{line}"
        ),
        Err(err) => warn!(
            %trace_id,
            username = record.username(),
            kind = %err.kind(),
            "{line}"
        ),
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
