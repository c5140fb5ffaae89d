//! Request routing.
//!
//! Routing is an ordered table of predicates. The first route whose
//! predicate accepts the request decides the response strategy.

use std::fmt;
use std::sync::Arc;

use crate::parser::Method;
use crate::server::config::ServerConfig;

/// How the response to a request is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStrategy {
    /// List the subdirectories of the web root.
    RootListing,
    /// The hardcoded listing of `a.txt` through `d.txt`.
    FixedSubdirectoryListing,
    /// Serve the file at the given request path beneath the web root.
    StaticFile(String),
}

/// Type alias for a route predicate.
pub(crate) type Predicate = Arc<dyn Fn(&Method, &str) -> bool + Send + Sync>;

/// Type alias for the function turning a matched path into a strategy.
pub(crate) type StrategyFn = fn(&str) -> ResponseStrategy;

/// Represents a route in the routing table.
pub(crate) struct Route {
    /// A short name used in logs.
    pub name: &'static str,
    /// Decides whether the route applies to a request.
    pub predicate: Predicate,
    /// Builds the strategy for a matching request.
    pub strategy: StrategyFn,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("name", &self.name).finish()
    }
}

/// The ordered routing table.
pub struct Router {
    routes: Vec<Route>,
    /// Used when no route matches.
    fallback: (&'static str, StrategyFn),
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.route_names())
            .finish()
    }
}

fn static_file(path: &str) -> ResponseStrategy {
    ResponseStrategy::StaticFile(path.to_string())
}

impl Router {
    /// Create the routing table for the given configuration.
    ///
    /// The routes, in order of precedence:
    ///
    /// 1. `GET /` lists the web root.
    /// 2. `GET` of a path ending in `subdirectory/` plus the default file
    ///    yields the fixed listing.
    /// 3. Everything else, whatever the method, is served as a static file.
    pub fn new(config: &ServerConfig) -> Self {
        let fixed_suffix = format!("subdirectory/{}", config.default_file);
        Self {
            routes: vec![
                Route {
                    name: "root-listing",
                    predicate: Arc::new(|method: &Method, path: &str| *method == Method::GET && path == "/"),
                    strategy: |_: &str| ResponseStrategy::RootListing,
                },
                Route {
                    name: "fixed-subdirectory-listing",
                    predicate: Arc::new(move |method: &Method, path: &str| {
                        *method == Method::GET && path.ends_with(fixed_suffix.as_str())
                    }),
                    strategy: |_: &str| ResponseStrategy::FixedSubdirectoryListing,
                },
            ],
            fallback: ("static-file", static_file),
        }
    }

    /// Select the strategy for a request.
    ///
    /// # Examples
    ///
    /// ```
    /// use webroot_server::{Method, ResponseStrategy, Router, ServerConfig};
    ///
    /// let router = Router::new(&ServerConfig::default());
    /// assert_eq!(router.select(&Method::GET, "/"), ResponseStrategy::RootListing);
    /// assert_eq!(
    ///     router.select(&Method::HEAD, "/"),
    ///     ResponseStrategy::StaticFile("/".to_string())
    /// );
    /// ```
    pub fn select(&self, method: &Method, path: &str) -> ResponseStrategy {
        self.routes
            .iter()
            .find(|route| (route.predicate)(method, path))
            .map_or_else(|| (self.fallback.1)(path), |route| (route.strategy)(path))
    }

    /// The route names in order of precedence.
    pub fn route_names(&self) -> Vec<&'static str> {
        self.routes
            .iter()
            .map(|route| route.name)
            .chain(Some(self.fallback.0))
            .collect()
    }
}
