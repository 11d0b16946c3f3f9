//! Fault injection middleware
//!
//! Wraps any axum/tower service and, for the requests selected by a
//! [`Fault`] policy, either answers with the configured error status or
//! delays the request before handing it on.
//!
//! An injected delay ends early when the request's [`RequestCancellation`]
//! token fires; the inner service is then never called and the client gets
//! `499`. A deadline enforced by an outer timeout layer drops this future
//! mid-delay, which has the same effect.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fault::{Fault, FaultError, InjectorOutcome};
use tokio_util::sync::CancellationToken;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::CLIENT_CLOSED_REQUEST;

/// Cancellation signal for a single request.
///
/// Insert into the request extensions (for example from an outer layer that
/// watches the client connection) to let an injected delay be abandoned.
#[derive(Debug, Clone, Default)]
pub struct RequestCancellation(pub CancellationToken);

impl RequestCancellation {
    /// Create a fresh, uncancelled signal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to cancel this request
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.0.clone()
    }
}

/// Layer that applies fault injection
#[derive(Clone, Debug)]
pub struct FaultLayer {
    fault: Fault,
}

impl FaultLayer {
    /// Create a new fault injection layer
    #[must_use]
    pub const fn new(fault: Fault) -> Self {
        Self { fault }
    }
}

impl<S> Layer<S> for FaultLayer {
    type Service = FaultService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FaultService {
            inner,
            fault: self.fault.clone(),
        }
    }
}

/// Middleware service for fault injection
#[derive(Clone, Debug)]
pub struct FaultService<S> {
    inner: S,
    fault: Fault,
}

impl<S> Service<Request> for FaultService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let decision = self.fault.decide(req.uri().path());
        let mut inner = self.inner.clone();

        if !decision.is_faulted() {
            return Box::pin(async move { inner.call(req).await });
        }

        let injector = *self.fault.injector();
        let cancel = req
            .extensions()
            .get::<RequestCancellation>()
            .map(RequestCancellation::token)
            .unwrap_or_default();

        Box::pin(async move {
            let path = req.uri().path().to_string();

            match injector.inject(&cancel).await {
                Ok(InjectorOutcome::Continue) => {
                    debug!(path = %path, injector = %injector, "Fault delay elapsed");
                    inner.call(req).await
                },
                Ok(InjectorOutcome::Terminate(code)) => match StatusCode::from_u16(code) {
                    Ok(status) => {
                        debug!(path = %path, status = %code, "Fault terminated request");
                        Ok(status.into_response())
                    },
                    Err(e) => {
                        // Fail open: never block traffic on our own bug
                        warn!(
                            path = %path,
                            status = %code,
                            error = %e,
                            "Unusable fault status, passing through"
                        );
                        inner.call(req).await
                    },
                },
                Err(FaultError::Cancelled) => {
                    warn!(path = %path, "Request cancelled during injected delay");
                    Ok(client_closed_response())
                },
                Err(e @ FaultError::InvalidConfig(_)) => {
                    warn!(path = %path, error = %e, "Fault injection failed, passing through");
                    inner.call(req).await
                },
            }
        })
    }
}

/// Empty `499` response for a client that went away during a delay
fn client_closed_response() -> Response {
    StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
        .unwrap_or(StatusCode::REQUEST_TIMEOUT)
        .into_response()
}
