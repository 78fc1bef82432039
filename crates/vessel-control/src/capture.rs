use std::panic::{AssertUnwindSafe, catch_unwind};

use vessel_base::{CaptureConfig, Fault};

use crate::Attempt;

/// Runs `body` inside the fault-capture boundary.
///
/// A panic escaping `body` becomes a `Failure` when the config traps panics; otherwise it
/// keeps unwinding. Only the trapped panic is traced here: a `Failure` that `body` returns
/// was captured (or constructed) somewhere else.
///
/// The process panic hook still runs before unwinding reaches the boundary, so a trapped
/// panic is reported on stderr by the default hook unless the caller replaces it.
pub(crate) fn guard<T>(
    config: &CaptureConfig,
    site: &'static str,
    body: impl FnOnce() -> Attempt<T>,
) -> Attempt<T> {
    if !config.capture_panics {
        return body();
    }
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let fault = Fault::from_panic(payload);
        trace(config, site, &fault);
        Attempt::Failure(fault)
    })
}

/// Like [`guard`] for a computation that reports errors by returning `Err`.
pub(crate) fn guard_result<T, E>(
    config: &CaptureConfig,
    site: &'static str,
    body: impl FnOnce() -> Result<T, E>,
) -> Attempt<T>
where
    E: Into<Fault>,
{
    guard(config, site, || match body() {
        Ok(value) => Attempt::Success(value),
        Err(err) => {
            let fault = err.into();
            trace(config, site, &fault);
            Attempt::Failure(fault)
        }
    })
}

pub(crate) fn capture<T, E>(result: Result<T, E>) -> Attempt<T>
where
    E: Into<Fault>,
{
    match result {
        Ok(value) => Attempt::Success(value),
        Err(err) => Attempt::Failure(err.into()),
    }
}

fn trace(config: &CaptureConfig, site: &'static str, fault: &Fault) {
    if config.trace_captures {
        tracing::debug!(
            target: "vessel::capture",
            site,
            kind = ?fault.kind(),
            "captured fault: {fault}"
        );
    }
}
