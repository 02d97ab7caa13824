//! Closed taxonomy of log stacks, levels and packages.
//!
//! A package is accepted for a stack when it is either shared or listed in
//! that stack's own set. These tables are exported read-only so callers can
//! introspect the permitted values.

pub const VALID_STACKS: [&str; 2] = ["backend", "frontend"];

pub const VALID_LEVELS: [&str; 5] = ["debug", "info", "warn", "error", "fatal"];

pub const BACKEND_PACKAGES: [&str; 9] = [
    "cache",
    "controller",
    "cron_job",
    "db",
    "domain",
    "handler",
    "repository",
    "route",
    "service",
];

pub const FRONTEND_PACKAGES: [&str; 6] = ["api", "component", "hook", "page", "state", "style"];

pub const SHARED_PACKAGES: [&str; 4] = ["auth", "config", "middleware", "utils"];

/// Stack-specific packages followed by the shared ones.
///
/// Unknown stacks fall back to the frontend set so an error message can still
/// list something useful.
pub fn allowed_packages(stack: &str) -> Vec<&'static str> {
    let specific: &[&'static str] = if stack.eq_ignore_ascii_case("backend") {
        &BACKEND_PACKAGES
    } else {
        &FRONTEND_PACKAGES
    };

    specific.iter().chain(SHARED_PACKAGES.iter()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_sets_are_disjoint() {
        for pkg in SHARED_PACKAGES {
            assert!(!BACKEND_PACKAGES.contains(&pkg));
            assert!(!FRONTEND_PACKAGES.contains(&pkg));
        }
        for pkg in BACKEND_PACKAGES {
            assert!(!FRONTEND_PACKAGES.contains(&pkg));
        }
    }

    #[test]
    fn test_allowed_packages_lists_specific_then_shared() {
        let backend = allowed_packages("BACKEND");
        assert_eq!(backend.len(), 13);
        assert_eq!(backend[0], "cache");
        assert_eq!(backend[12], "utils");

        let frontend = allowed_packages("frontend");
        assert_eq!(
            frontend,
            vec![
                "api",
                "component",
                "hook",
                "page",
                "state",
                "style",
                "auth",
                "config",
                "middleware",
                "utils"
            ]
        );
    }
}
