//! Operation logging bridge.
//!
//! The user service reports the outcome of every call to an
//! [`OperationLogger`]. Loggers only observe: they return nothing and the
//! service hands back its result unchanged whatever the logger does.

use std::fmt;

use domain::DomainError;

/// Caller-supplied description of an operation, in place of call-site
/// introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    operation: &'static str,
    extra: String,
}

impl CallContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            extra: String::new(),
        }
    }

    /// Attach free-text context (never credentials)
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extra.is_empty() {
            write!(f, "{}", self.operation)
        } else {
            write!(f, "{} ({})", self.operation, self.extra)
        }
    }
}

/// Outcome of one user service call.
#[derive(Debug, Clone, Copy)]
pub struct OperationRecord<'a> {
    pub context: &'a CallContext,
    /// `None` on success
    pub error: Option<DomainError>,
    /// Diagnostic detail for internal failures; never shown to end users
    pub detail: Option<&'a str>,
}

/// Sink for operation outcomes.
pub trait OperationLogger: Send + Sync {
    fn record(&self, record: &OperationRecord<'_>);
}

/// Default logger: emits `tracing` events.
///
/// Success goes out at `debug`, rejected requests at `info`, internal
/// failures at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOperationLogger;

impl OperationLogger for TracingOperationLogger {
    fn record(&self, record: &OperationRecord<'_>) {
        let operation = record.context.operation();
        let extra = record.context.extra();

        match record.error {
            None => tracing::debug!(operation, extra, "Success"),
            Some(error) if error.is_internal() => tracing::error!(
                operation,
                extra,
                code = error.code(),
                detail = record.detail.unwrap_or("none"),
                "Failure"
            ),
            Some(error) => tracing::info!(operation, extra, code = error.code(), "Failure"),
        }
    }
}

/// Logger that drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOperationLogger;

impl OperationLogger for NoopOperationLogger {
    fn record(&self, _record: &OperationRecord<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_context_display() {
        let context = CallContext::new("login");
        assert_eq!(context.to_string(), "login");

        let context = context.with_extra("username = alice123");
        assert_eq!(context.to_string(), "login (username = alice123)");
        assert_eq!(context.operation(), "login");
    }

    #[test]
    fn test_tracing_logger_accepts_every_outcome() {
        let context = CallContext::new("register").with_extra("username = alice123");
        let logger = TracingOperationLogger;

        for error in [None, Some(DomainError::UsernameReserved), Some(DomainError::Internal)] {
            logger.record(&OperationRecord {
                context: &context,
                error,
                detail: Some("insert failed"),
            });
        }
    }
}
