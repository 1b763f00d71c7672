//! The fixed route table for the forwarded surface.
//!
//! # Responsibilities
//! - Declare the inbound routes and the downstream shape of each
//! - Build the downstream path from extracted path parameters
//! - Enforce the digit constraint on customer ids
//!
//! # Design Decisions
//! - The inbound pattern doubles as the downstream path template; routes
//!   map one-to-one onto the downstream service
//! - Parameters are substituted verbatim, no URL-encoding; the downstream
//!   expects raw values

/// Name of the customer id path parameter.
pub const CUSTOMER_ID: &str = "customer_id";

/// Static description of one forwarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    /// Route identifier for logging.
    pub name: &'static str,

    /// Inbound path pattern; doubles as the downstream path template.
    pub pattern: &'static str,

    /// Whether the downstream call advertises `Accept: application/json`.
    pub accept_json: bool,
}

/// Every route the gateway exposes. All are POST.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        name: "recording",
        pattern: "/frx/record/{customer_id}/{transaction_type}/",
        accept_json: true,
    },
    RouteSpec {
        name: "authorization",
        pattern: "/frx/authorization/{customer_id}/{transaction_type}/",
        accept_json: true,
    },
    RouteSpec {
        name: "risk_management",
        pattern: "/frx/risk/{customer_id}/{transaction_type}/",
        accept_json: true,
    },
    RouteSpec {
        name: "service_availability",
        pattern: "/admin/health/",
        accept_json: true,
    },
    RouteSpec {
        name: "initialization",
        pattern: "/frx/initialize/{customer_id}/",
        accept_json: false,
    },
];

/// Look up the spec registered for a matched path pattern.
pub fn route_for_pattern(pattern: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|route| route.pattern == pattern)
}

/// True when `value` is a non-empty decimal-digit sequence.
pub fn is_valid_customer_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Substitute extracted parameters into the route's path template.
///
/// Values are inserted exactly as received from the caller.
pub fn downstream_path<'a, I>(spec: &RouteSpec, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut path = spec.pattern.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), value);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup() {
        let route = route_for_pattern("/frx/record/{customer_id}/{transaction_type}/").unwrap();
        assert_eq!(route.name, "recording");
        assert!(route.accept_json);

        let route = route_for_pattern("/frx/initialize/{customer_id}/").unwrap();
        assert_eq!(route.name, "initialization");
        assert!(!route.accept_json);

        assert!(route_for_pattern("/frx/unknown/").is_none());
    }

    #[test]
    fn test_customer_id_validation() {
        assert!(is_valid_customer_id("42"));
        assert!(is_valid_customer_id("0001"));

        assert!(!is_valid_customer_id(""));
        assert!(!is_valid_customer_id("42a"));
        assert!(!is_valid_customer_id("-1"));
        assert!(!is_valid_customer_id("4 2"));
    }

    #[test]
    fn test_substitution_with_both_params() {
        let route = route_for_pattern("/frx/record/{customer_id}/{transaction_type}/").unwrap();
        let path = downstream_path(
            route,
            vec![("customer_id", "42"), ("transaction_type", "purchase")],
        );
        assert_eq!(path, "/frx/record/42/purchase/");
    }

    #[test]
    fn test_substitution_with_customer_only() {
        let route = route_for_pattern("/frx/initialize/{customer_id}/").unwrap();
        let path = downstream_path(route, vec![("customer_id", "7")]);
        assert_eq!(path, "/frx/initialize/7/");
    }

    #[test]
    fn test_health_substitutes_nothing() {
        let route = route_for_pattern("/admin/health/").unwrap();
        let path = downstream_path(route, Vec::new());
        assert_eq!(path, "/admin/health/");
    }

    #[test]
    fn test_values_are_not_encoded() {
        let route = route_for_pattern("/frx/risk/{customer_id}/{transaction_type}/").unwrap();
        let path = downstream_path(
            route,
            vec![("customer_id", "42"), ("transaction_type", "a b")],
        );
        assert_eq!(path, "/frx/risk/42/a b/");
    }
}
