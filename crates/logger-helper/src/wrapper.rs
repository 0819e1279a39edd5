//! # Wrapped Callables
//!
//! [`WrappedCallable`] is the logging proxy. It presents the original's
//! metadata as its own and, on every call:
//!
//! 1. logs the call (before the original runs),
//! 2. runs the original with the untouched arguments,
//! 3. logs either the return value or the error, and hands back exactly what
//!    the original produced. A template that fails to render at this point
//!    is reported with `warn!`; the original's result still goes back.
//!
//! Panics are treated like errors: the exception entry is logged with the
//! kind `panic`, then the unwind resumes with the original payload.

use crate::args::Args;
use crate::callable::Callable;
use crate::error::Raised;
use crate::logger::CallLogger;
use crate::signature::Metadata;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// Kind name logged when the wrapped callable panics.
pub const PANIC_KIND: &str = "panic";

/// A callable that logs calls to, returns from and errors of another callable.
#[derive(Clone)]
pub struct WrappedCallable {
    logger: CallLogger,
    original: Arc<dyn Callable>,
    member_call: bool,
}

impl WrappedCallable {
    pub(crate) fn new(logger: CallLogger, original: Arc<dyn Callable>, member_call: bool) -> Self {
        Self {
            logger,
            original,
            member_call,
        }
    }

    /// The callable being proxied.
    pub fn original(&self) -> &Arc<dyn Callable> {
        &self.original
    }

    /// Whether the leading receiver is left out of the call entry.
    pub fn is_member_call(&self) -> bool {
        self.member_call
    }
}

impl Callable for WrappedCallable {
    fn metadata(&self) -> &Metadata {
        self.original.metadata()
    }

    fn call(&self, args: &Args) -> Result<Value, Raised> {
        let original = &*self.original;
        // One snapshot per invocation, even if the formats change mid-call.
        let formats = self.logger.formats();

        self.logger
            .log_call_with(&formats, original, args, self.member_call)?;

        match panic::catch_unwind(AssertUnwindSafe(|| original.call(args))) {
            Ok(Ok(value)) => {
                if let Err(e) = self.logger.log_return_with(&formats, original, &value) {
                    warn!(error = %e, "Could not log return value");
                }
                Ok(value)
            }
            Ok(Err(raised)) => {
                if let Err(e) = self.logger.log_exception_with(
                    &formats,
                    original,
                    raised.kind(),
                    &raised.message(),
                ) {
                    warn!(error = %e, "Could not log error");
                }
                Err(raised)
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                if let Err(e) = self
                    .logger
                    .log_exception_with(&formats, original, PANIC_KIND, &message)
                {
                    warn!(error = %e, "Could not log panic");
                }
                panic::resume_unwind(payload)
            }
        }
    }
}

impl fmt::Debug for WrappedCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedCallable")
            .field("original", &self.original)
            .field("member_call", &self.member_call)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
