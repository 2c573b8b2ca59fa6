//! Uniform success/error envelopes returned by every tool invocation.
//!
//! Every tool returns exactly one of two shapes: a success object keyed by
//! the operation's domain key (plus any echoed filter keys), or an error
//! object carrying `error` and, for remote rejections, `status_code`. The
//! two shapes never mix; callers branch on the presence of `error`.

use serde_json::{Map, Value, json};

/// Wrap a decoded response body under the operation's domain key.
///
/// `extras` are echoed beside the data key (applied filters, the queried
/// hostname, and so on) and are only ever present on the success shape.
#[must_use]
pub fn success(key: &str, body: Value, extras: Vec<(&'static str, Value)>) -> Value {
    let mut envelope = Map::new();
    envelope.insert(key.to_string(), body);
    for (extra_key, extra_value) in extras {
        envelope.insert(extra_key.to_string(), extra_value);
    }
    Value::Object(envelope)
}

/// Build the error shape.
///
/// `status_code` is present for remote rejections (non-2xx responses) and
/// absent for transport or decode failures.
#[must_use]
pub fn error(message: impl Into<String>, status_code: Option<u16>) -> Value {
    let message: String = message.into();
    match status_code {
        Some(status) => json!({
            "error": message,
            "status_code": status,
        }),
        None => json!({ "error": message }),
    }
}

/// The error message of an envelope, if it is the error shape.
#[must_use]
pub fn error_message(envelope: &Value) -> Option<&str> {
    envelope.get("error").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::{error, error_message, success};
    use serde_json::json;

    #[test]
    fn success_wraps_body_under_domain_key() {
        let envelope = success("free_clouds", json!(["cloud01", "cloud02"]), Vec::new());
        assert_eq!(envelope, json!({"free_clouds": ["cloud01", "cloud02"]}));
        assert!(error_message(&envelope).is_none());
    }

    #[test]
    fn success_echoes_extras_beside_domain_key() {
        let envelope = success(
            "hosts",
            json!([]),
            vec![("filters", json!({"model": "r640"}))],
        );
        assert_eq!(
            envelope,
            json!({"hosts": [], "filters": {"model": "r640"}})
        );
    }

    #[test]
    fn rejection_carries_status_code() {
        let envelope = error("Failed to get clouds: HTTP 503", Some(503));
        assert_eq!(
            envelope,
            json!({"error": "Failed to get clouds: HTTP 503", "status_code": 503})
        );
    }

    #[test]
    fn transport_failure_has_no_status_code() {
        let envelope = error("Failed to get clouds: connection refused", None);
        assert_eq!(
            envelope,
            json!({"error": "Failed to get clouds: connection refused"})
        );
        assert!(envelope.get("status_code").is_none());
    }
}
