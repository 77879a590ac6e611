//! The static route table.
//!
//! # Responsibilities
//! - Hold the top-level bindings in declared order
//! - Look up the first binding matching a path
//! - Return matched binding or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Binding names, where present, must be unique (checked at build)
//! - Explicit `None` on no match rather than silent default

use thiserror::Error;

use crate::routing::matcher::RoutePattern;

/// What a matched binding does with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Delegate to a mounted sub-router (admin site, API module).
    Mount,
    /// Answer with a 308 Permanent Redirect to the given location.
    PermanentRedirect(String),
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pattern: RoutePattern,
    action: RouteAction,
    name: Option<String>,
}

impl RouteBinding {
    /// Mount a sub-router at the given prefix.
    pub fn mount(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: RoutePattern::prefix(prefix),
            action: RouteAction::Mount,
            name: Some(name.into()),
        }
    }

    /// Redirect the exact path permanently to `target`.
    pub fn redirect(path: impl Into<String>, target: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: RoutePattern::exact(path),
            action: RouteAction::PermanentRedirect(target.into()),
            name: Some(name.into()),
        }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn action(&self) -> &RouteAction {
        &self.action
    }

    /// Binding name for logging and metrics labels.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Error raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
}

/// Ordered, immutable set of top-level route bindings.
#[derive(Debug, Clone)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

/// Binding names of the standard table. Also the metrics route labels.
pub const ADMIN: &str = "admin";
pub const API_INDEX: &str = "api_index";
pub const API_V1: &str = "api_v1";

impl RouteTable {
    /// Build a table from bindings in declared order.
    ///
    /// Fails if two bindings carry the same name.
    pub fn new(bindings: Vec<RouteBinding>) -> Result<Self, RouteTableError> {
        let mut seen: Vec<&str> = Vec::with_capacity(bindings.len());
        for binding in &bindings {
            if let Some(name) = binding.name() {
                if seen.contains(&name) {
                    return Err(RouteTableError::DuplicateName(name.to_string()));
                }
                seen.push(name);
            }
        }
        Ok(Self { bindings })
    }

    /// The standard table of this service:
    /// admin mount, `/api/` redirect, `/api/v1/` API mount.
    ///
    /// The redirect entry is an exact match, so it can never shadow the
    /// v1 mount despite first-match-wins ordering.
    pub fn standard() -> Self {
        // Names are statically distinct, the duplicate check cannot fire.
        Self {
            bindings: vec![
                RouteBinding::mount("/admin/", ADMIN),
                RouteBinding::redirect("/api/", "/api/v1/", API_INDEX),
                RouteBinding::mount("/api/v1/", API_V1),
            ],
        }
    }

    /// Bindings in declared order.
    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    /// First binding whose pattern matches the path, or `None`.
    pub fn lookup(&self, path: &str) -> Option<&RouteBinding> {
        self.bindings.iter().find(|b| b.pattern().matches(path))
    }
}
