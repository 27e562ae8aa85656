//! Destination scope for bound symbols.

use std::collections::HashMap;
use std::sync::Arc;

use tagkit_registry::{FilterRef, TagLibrary, TagRef};

use crate::resolve::Bindings;

/// Symbol scope of one template-compilation pass.
///
/// Owns the tables that loading directives merge into and that the host
/// engine consults when it encounters a tag or filter name. Each render
/// builds its own context; nothing is shared between passes.
///
/// Merging overwrites entries with identical bound names, so a later
/// directive (or a later clause of the same directive) wins on collision.
#[derive(Default)]
pub struct ParseContext {
    tags: HashMap<String, TagRef>,
    filters: HashMap<String, FilterRef>,
}

impl ParseContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge resolved bindings into the scope.
    pub fn merge(&mut self, bindings: Bindings) {
        self.tags.extend(bindings.tags);
        self.filters.extend(bindings.filters);
    }

    /// Merge a whole library under its registered names.
    ///
    /// Hosts use this to install built-in libraries before any directive
    /// runs.
    pub fn add_library(&mut self, library: &TagLibrary) {
        for (name, handler) in library.tags() {
            self.tags.insert(name.clone(), Arc::clone(handler));
        }
        for (name, handler) in library.filters() {
            self.filters.insert(name.clone(), Arc::clone(handler));
        }
    }

    /// Look up a tag by its bound (possibly namespaced) name.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&TagRef> {
        self.tags.get(name)
    }

    /// Look up a filter by its bound (possibly namespaced) name.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterRef> {
        self.filters.get(name)
    }

    /// Number of bound tags.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Number of bound filters.
    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// True if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.filters.is_empty()
    }
}
