//! W3C trace-context header carrier.
//!
//! The CEP lookup pipeline forwards the caller's distributed-trace context
//! to its upstream. The context is carried as an explicit value extracted at
//! the HTTP boundary and injected into the outbound request headers, never
//! as ambient state.

use http::header::{HeaderMap, HeaderName, HeaderValue};

const TRACEPARENT: HeaderName = HeaderName::from_static("traceparent");
const TRACESTATE: HeaderName = HeaderName::from_static("tracestate");

/// Inbound trace context, copied verbatim between HTTP hops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    traceparent: Option<String>,
    tracestate: Option<String>,
}

impl TraceContext {
    /// Reads `traceparent` / `tracestate` from an inbound request's headers.
    ///
    /// Values that are not valid UTF-8 are ignored.
    pub fn extract(headers: &HeaderMap) -> Self {
        let value = |name: &HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };

        Self {
            traceparent: value(&TRACEPARENT),
            tracestate: value(&TRACESTATE),
        }
    }

    /// Copies the carried headers onto an outbound request's header map.
    ///
    /// A request without trace context leaves the outbound headers untouched.
    pub fn inject(&self, headers: &mut HeaderMap) {
        if let Some(traceparent) = &self.traceparent
            && let Ok(value) = HeaderValue::from_str(traceparent)
        {
            headers.insert(TRACEPARENT, value);
        }

        if let Some(tracestate) = &self.tracestate
            && let Ok(value) = HeaderValue::from_str(tracestate)
        {
            headers.insert(TRACESTATE, value);
        }
    }

    /// Whether the inbound request carried any trace headers.
    pub fn is_empty(&self) -> bool {
        self.traceparent.is_none() && self.tracestate.is_none()
    }
}
