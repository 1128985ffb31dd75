//! Route stack for moving between the search screen and ticker details
//!
//! The search screen is the implicit root. Each navigation pushes a route of
//! the form `/<ticker>` carrying the document that produced it.

use crate::search::Document;

/// A pushed detail route
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: String,
    document: Document,
}

impl Route {
    /// Build the detail route for a search result
    pub fn for_document(document: Document) -> Self {
        Self {
            path: route_path(&document.ticker),
            document,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Path segment for a ticker, e.g. `AAPL` becomes `/AAPL`
pub fn route_path(ticker: &str) -> String {
    format!("/{}", ticker)
}

/// Result of going back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// A route was popped; `Router::current` is now what is shown
    Popped,
    /// Already at the search root, so the screen itself is left
    LeftRoot,
}

/// Routes pushed on top of the search screen, newest last
#[derive(Debug, Default)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        log::debug!("Navigating to {}", route.path());
        self.stack.push(route);
    }

    pub fn back(&mut self) -> BackOutcome {
        match self.stack.pop() {
            Some(route) => {
                log::debug!("Leaving {}", route.path());
                BackOutcome::Popped
            }
            None => BackOutcome::LeftRoot,
        }
    }

    /// Route currently displayed, `None` on the search screen
    pub fn current(&self) -> Option<&Route> {
        self.stack.last()
    }
}
