//! The QUADS tool catalog: one typed argument shape and one call
//! declaration per remote endpoint family.
//!
//! Each function here is a pure mapping from declared arguments to a
//! [`ToolCall`]; no two operations share any state, and none does anything
//! beyond describing its single outbound request. All dates are
//! `YYYY-MM-DD` strings, as the QUADS API expects.

use crate::runtime::{Credentials, QueryParams, SuccessNote, ToolCall};
use reqwest::Method;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Credentials for `quads_login`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LoginArgs {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

/// Optional filters for `quads_get_hosts`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HostFilters {
    /// Filter hosts by name.
    pub name: Option<String>,
    /// Filter hosts by hardware model.
    pub model: Option<String>,
    /// Filter hosts by type.
    pub host_type: Option<String>,
    /// Filter hosts by broken status.
    pub broken: Option<bool>,
}

/// Target host for `quads_get_host_details`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HostDetailsArgs {
    /// The hostname to get details for.
    pub hostname: String,
}

/// Optional window and cloud filters for `quads_get_available_hosts`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AvailabilityFilters {
    /// Start date (`YYYY-MM-DD`).
    pub start: Option<String>,
    /// End date (`YYYY-MM-DD`).
    pub end: Option<String>,
    /// Filter by cloud name.
    pub cloud: Option<String>,
}

/// Target host and optional window for `quads_check_host_availability`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HostAvailabilityArgs {
    /// The hostname to check.
    pub hostname: String,
    /// Start date (`YYYY-MM-DD`).
    #[serde(default)]
    pub start: Option<String>,
    /// End date (`YYYY-MM-DD`).
    #[serde(default)]
    pub end: Option<String>,
}

/// Optional filters for `quads_get_current_schedules`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScheduleFilters {
    /// Date to check current schedules for (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Filter by hostname.
    pub host: Option<String>,
    /// Filter by cloud name.
    pub cloud: Option<String>,
}

/// Optional cloud filter for `quads_get_active_assignments`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ActiveAssignmentFilter {
    /// Restrict to a specific cloud.
    pub cloud_name: Option<String>,
}

/// Optional date filter for `quads_get_moves`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MoveFilters {
    /// Date to get moves for (`YYYY-MM-DD`).
    pub date: Option<String>,
}

#[must_use]
pub fn login(args: &LoginArgs) -> ToolCall {
    ToolCall {
        name: "quads_login",
        method: Method::POST,
        path: "/login/".to_string(),
        query: QueryParams::new(),
        credentials: Some(Credentials {
            username: args.username.clone(),
            password: args.password.clone(),
        }),
        success_key: "login",
        extras: Vec::new(),
        context: "Login failed".to_string(),
        note: SuccessNote::Plain("Successfully logged in to QUADS".to_string()),
    }
}

#[must_use]
pub fn clouds() -> ToolCall {
    ToolCall {
        name: "quads_get_clouds",
        method: Method::GET,
        path: "/clouds/".to_string(),
        query: QueryParams::new(),
        credentials: None,
        success_key: "clouds",
        extras: Vec::new(),
        context: "Failed to get clouds".to_string(),
        note: SuccessNote::Counted("clouds"),
    }
}

#[must_use]
pub fn free_clouds() -> ToolCall {
    ToolCall {
        name: "quads_get_free_clouds",
        method: Method::GET,
        path: "/clouds/free/".to_string(),
        query: QueryParams::new(),
        credentials: None,
        success_key: "free_clouds",
        extras: Vec::new(),
        context: "Failed to get free clouds".to_string(),
        note: SuccessNote::Counted("free clouds"),
    }
}

#[must_use]
pub fn hosts(args: &HostFilters) -> ToolCall {
    let mut query = QueryParams::new();
    query.push_text("name", args.name.as_deref());
    query.push_text("model", args.model.as_deref());
    query.push_text("host_type", args.host_type.as_deref());
    query.push_flag("broken", args.broken);
    let filters = query.to_object();

    ToolCall {
        name: "quads_get_hosts",
        method: Method::GET,
        path: "/hosts/".to_string(),
        query,
        credentials: None,
        success_key: "hosts",
        extras: vec![("filters", filters)],
        context: "Failed to get hosts".to_string(),
        note: SuccessNote::Counted("hosts"),
    }
}

#[must_use]
pub fn host_details(args: &HostDetailsArgs) -> ToolCall {
    ToolCall {
        name: "quads_get_host_details",
        method: Method::GET,
        path: format!("/hosts/{}/", args.hostname),
        query: QueryParams::new(),
        credentials: None,
        success_key: "host",
        extras: Vec::new(),
        context: format!("Failed to get host details for {}", args.hostname),
        note: SuccessNote::Plain(format!("Retrieved details for host {}", args.hostname)),
    }
}

#[must_use]
pub fn available_hosts(args: &AvailabilityFilters) -> ToolCall {
    let mut query = QueryParams::new();
    query.push_text("start", args.start.as_deref());
    query.push_text("end", args.end.as_deref());
    query.push_text("cloud", args.cloud.as_deref());
    let parameters = query.to_object();

    ToolCall {
        name: "quads_get_available_hosts",
        method: Method::GET,
        path: "/available/".to_string(),
        query,
        credentials: None,
        success_key: "available_hosts",
        extras: vec![("parameters", parameters)],
        context: "Failed to get available hosts".to_string(),
        note: SuccessNote::Counted("available hosts"),
    }
}

#[must_use]
pub fn host_availability(args: &HostAvailabilityArgs) -> ToolCall {
    let mut query = QueryParams::new();
    query.push_text("start", args.start.as_deref());
    query.push_text("end", args.end.as_deref());
    let parameters = query.to_object();

    ToolCall {
        name: "quads_check_host_availability",
        method: Method::GET,
        path: format!("/available/{}/", args.hostname),
        query,
        credentials: None,
        success_key: "availability",
        extras: vec![
            ("hostname", Value::String(args.hostname.clone())),
            ("parameters", parameters),
        ],
        context: format!(
            "Failed to check host availability for {}",
            args.hostname
        ),
        note: SuccessNote::Plain(format!(
            "Checked availability for host {}",
            args.hostname
        )),
    }
}

#[must_use]
pub fn schedules() -> ToolCall {
    ToolCall {
        name: "quads_get_schedules",
        method: Method::GET,
        path: "/schedules/".to_string(),
        query: QueryParams::new(),
        credentials: None,
        success_key: "schedules",
        extras: Vec::new(),
        context: "Failed to get schedules".to_string(),
        note: SuccessNote::Counted("schedules"),
    }
}

#[must_use]
pub fn current_schedules(args: &ScheduleFilters) -> ToolCall {
    let mut query = QueryParams::new();
    query.push_text("date", args.date.as_deref());
    query.push_text("host", args.host.as_deref());
    query.push_text("cloud", args.cloud.as_deref());
    let parameters = query.to_object();

    ToolCall {
        name: "quads_get_current_schedules",
        method: Method::GET,
        path: "/schedules/current/".to_string(),
        query,
        credentials: None,
        success_key: "current_schedules",
        extras: vec![("parameters", parameters)],
        context: "Failed to get current schedules".to_string(),
        note: SuccessNote::Plain("Retrieved current schedules".to_string()),
    }
}

#[must_use]
pub fn assignments() -> ToolCall {
    ToolCall {
        name: "quads_get_assignments",
        method: Method::GET,
        path: "/assignments/".to_string(),
        query: QueryParams::new(),
        credentials: None,
        success_key: "assignments",
        extras: Vec::new(),
        context: "Failed to get assignments".to_string(),
        note: SuccessNote::Plain("Retrieved assignments".to_string()),
    }
}

#[must_use]
pub fn active_assignments(args: &ActiveAssignmentFilter) -> ToolCall {
    let cloud = args.cloud_name.as_deref().filter(|c| !c.is_empty());
    let path = match cloud {
        Some(cloud) => format!("/assignments/active/{cloud}/"),
        None => "/assignments/active/".to_string(),
    };
    let cloud_filter = cloud.map_or(Value::Null, |c| Value::String(c.to_string()));

    ToolCall {
        name: "quads_get_active_assignments",
        method: Method::GET,
        path,
        query: QueryParams::new(),
        credentials: None,
        success_key: "active_assignments",
        extras: vec![("cloud_filter", cloud_filter)],
        context: "Failed to get active assignments".to_string(),
        note: SuccessNote::Plain("Retrieved active assignments".to_string()),
    }
}

#[must_use]
pub fn moves(args: &MoveFilters) -> ToolCall {
    let mut query = QueryParams::new();
    query.push_text("date", args.date.as_deref());
    let parameters = query.to_object();

    ToolCall {
        name: "quads_get_moves",
        method: Method::GET,
        path: "/moves/".to_string(),
        query,
        credentials: None,
        success_key: "moves",
        extras: vec![("parameters", parameters)],
        context: "Failed to get moves".to_string(),
        note: SuccessNote::Counted("moves"),
    }
}

#[must_use]
pub fn version() -> ToolCall {
    ToolCall {
        name: "quads_get_version",
        method: Method::GET,
        path: "/version/".to_string(),
        query: QueryParams::new(),
        credentials: None,
        success_key: "version",
        extras: Vec::new(),
        context: "Failed to get version".to_string(),
        note: SuccessNote::Plain("Retrieved QUADS version".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unfiltered_host_listing_has_empty_parameter_set() {
        let call = hosts(&HostFilters::default());
        assert!(call.query.is_empty());
        assert_eq!(call.extras, vec![("filters", json!({}))]);
    }

    #[test]
    fn broken_filter_serializes_lowercase() {
        let call = hosts(&HostFilters {
            broken: Some(true),
            ..HostFilters::default()
        });
        assert_eq!(
            call.query.pairs(),
            &[("broken".to_string(), "true".to_string())]
        );
        assert_eq!(call.extras, vec![("filters", json!({"broken": "true"}))]);
    }

    #[test]
    fn empty_string_filters_are_treated_as_absent() {
        let call = hosts(&HostFilters {
            name: Some(String::new()),
            model: Some("r640".to_string()),
            ..HostFilters::default()
        });
        assert_eq!(
            call.query.pairs(),
            &[("model".to_string(), "r640".to_string())]
        );
    }

    #[test]
    fn host_details_substitutes_hostname_into_path() {
        let call = host_details(&HostDetailsArgs {
            hostname: "mach01.example.com".to_string(),
        });
        assert_eq!(call.path, "/hosts/mach01.example.com/");
        assert_eq!(call.success_key, "host");
        assert_eq!(
            call.context,
            "Failed to get host details for mach01.example.com"
        );
    }

    #[test]
    fn host_availability_echoes_hostname_and_window() {
        let call = host_availability(&HostAvailabilityArgs {
            hostname: "mach02.example.com".to_string(),
            start: Some("2026-09-01".to_string()),
            end: None,
        });
        assert_eq!(call.path, "/available/mach02.example.com/");
        assert_eq!(
            call.query.pairs(),
            &[("start".to_string(), "2026-09-01".to_string())]
        );
        assert_eq!(
            call.extras,
            vec![
                ("hostname", json!("mach02.example.com")),
                ("parameters", json!({"start": "2026-09-01"})),
            ]
        );
    }

    #[test]
    fn active_assignments_path_depends_on_cloud_filter() {
        let all = active_assignments(&ActiveAssignmentFilter::default());
        assert_eq!(all.path, "/assignments/active/");
        assert_eq!(all.extras, vec![("cloud_filter", Value::Null)]);

        let filtered = active_assignments(&ActiveAssignmentFilter {
            cloud_name: Some("cloud04".to_string()),
        });
        assert_eq!(filtered.path, "/assignments/active/cloud04/");
        assert_eq!(filtered.extras, vec![("cloud_filter", json!("cloud04"))]);
    }

    #[test]
    fn only_login_carries_credentials() {
        let login = login(&LoginArgs {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        });
        assert_eq!(login.method, Method::POST);
        assert!(login.credentials.is_some());

        assert!(clouds().credentials.is_none());
        assert!(version().credentials.is_none());
        assert!(schedules().credentials.is_none());
    }
}
