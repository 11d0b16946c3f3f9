//! Fault strategies.
//!
//! An [`Injector`] either terminates the response with an error status or
//! delays the request before letting it continue. Adding a new kind of fault
//! means adding a variant here; the orchestration in [`crate::Fault`] and the
//! HTTP middleware only look at the [`InjectorOutcome`].

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::FaultError;

/// Lowest status code accepted by [`ErrorInjector`]
const MIN_STATUS: u16 = 100;
/// Highest status code accepted by [`ErrorInjector`]
const MAX_STATUS: u16 = 599;

/// Result of running an injector against a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectorOutcome {
    /// Stop here and answer with this status code
    Terminate(u16),
    /// Hand the request to the wrapped handler
    Continue,
}

/// Kind of fault selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectorKind {
    /// Respond with an error status
    #[default]
    Error,
    /// Add latency before the handler runs
    Slowness,
}

impl fmt::Display for InjectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Slowness => write!(f, "slowness"),
        }
    }
}

impl FromStr for InjectorKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "error" => Ok(Self::Error),
            "slowness" => Ok(Self::Slowness),
            other => Err(FaultError::invalid(format!(
                "unknown fault type '{other}', expected 'error' or 'slowness'"
            ))),
        }
    }
}

/// Terminates the response with a fixed status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInjector {
    status: u16,
}

impl ErrorInjector {
    /// Create an error injector, rejecting codes outside 100..=599
    pub fn new(status: u16) -> Result<Self, FaultError> {
        if !(MIN_STATUS..=MAX_STATUS).contains(&status) {
            return Err(FaultError::invalid(format!(
                "status code {status} is outside {MIN_STATUS}..={MAX_STATUS}"
            )));
        }
        Ok(Self { status })
    }

    /// Configured status code
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }
}

/// Delays the request before it continues to the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowInjector {
    delay: Duration,
}

impl SlowInjector {
    /// Create a slowness injector. A zero delay is a no-op.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the configured delay unless `cancel` fires first
    async fn wait(&self, cancel: &CancellationToken) -> Result<(), FaultError> {
        if self.delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(FaultError::Cancelled),
            () = tokio::time::sleep(self.delay) => Ok(()),
        }
    }
}

/// The fault applied when a request is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injector {
    /// Respond with an error status
    Error(ErrorInjector),
    /// Add latency, then continue
    Slow(SlowInjector),
}

impl Injector {
    /// Error injector for `status`
    pub fn error(status: u16) -> Result<Self, FaultError> {
        ErrorInjector::new(status).map(Self::Error)
    }

    /// Slowness injector for `delay`
    #[must_use]
    pub const fn slow(delay: Duration) -> Self {
        Self::Slow(SlowInjector::new(delay))
    }

    /// Slowness injector from signed milliseconds, rejecting negative values
    pub fn slow_millis(millis: i64) -> Result<Self, FaultError> {
        let millis = u64::try_from(millis)
            .map_err(|_| FaultError::invalid(format!("latency {millis}ms must not be negative")))?;
        Ok(Self::slow(Duration::from_millis(millis)))
    }

    /// Build the injector selected by `kind`.
    ///
    /// `status` is only used for [`InjectorKind::Error`] and `latency_ms`
    /// only for [`InjectorKind::Slowness`].
    pub fn from_kind(kind: InjectorKind, status: u16, latency_ms: i64) -> Result<Self, FaultError> {
        match kind {
            InjectorKind::Error => Self::error(status),
            InjectorKind::Slowness => Self::slow_millis(latency_ms),
        }
    }

    /// Kind of this injector
    #[must_use]
    pub const fn kind(&self) -> InjectorKind {
        match self {
            Self::Error(_) => InjectorKind::Error,
            Self::Slow(_) => InjectorKind::Slowness,
        }
    }

    /// Apply the fault.
    ///
    /// The error variant returns immediately. The slowness variant suspends
    /// for its delay and returns [`FaultError::Cancelled`] if `cancel` fires
    /// before the delay elapses.
    pub async fn inject(&self, cancel: &CancellationToken) -> Result<InjectorOutcome, FaultError> {
        match self {
            Self::Error(injector) => Ok(InjectorOutcome::Terminate(injector.status())),
            Self::Slow(injector) => {
                injector.wait(cancel).await?;
                Ok(InjectorOutcome::Continue)
            },
        }
    }
}

impl fmt::Display for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(injector) => write!(f, "error({})", injector.status()),
            Self::Slow(injector) => write!(f, "slowness({:?})", injector.delay()),
        }
    }
}
