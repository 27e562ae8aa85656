//! Best-match library resolution and symbol rebinding.
//!
//! Resolution searches every discoverable package for the requested library
//! name and picks the best candidate:
//!
//! 1. a package whose enclosing path equals the qualifier exactly
//!    (short-circuits the search),
//! 2. else the last package whose enclosing-path *tail* of the same segment
//!    count matches the qualifier,
//! 3. else the last package that provided the library at all — later
//!    packages shadow earlier ones, and a qualifier that matched nothing
//!    falls back here for compatibility with the classic directive,
//! 4. else the lookup fails, reporting every attempted candidate id.
//!
//! Rebinding never mutates the resolved library: selection, rename and
//! prefix build fresh maps which are then merged into the destination scope.

use std::collections::HashMap;
use std::sync::Arc;

use tagkit_registry::{FilterRef, LibraryRegistry, TagLibrary, TagRef};

use crate::error::LoadError;
use crate::request::{LoadRequest, SymbolSelector};

/// Symbols a request resolved to, keyed by their final bound names.
///
/// Produced by [`bind`] and merged into a
/// [`ParseContext`](crate::ParseContext).
#[derive(Default)]
pub struct Bindings {
    pub(crate) tags: HashMap<String, TagRef>,
    pub(crate) filters: HashMap<String, FilterRef>,
}

// `TagRef`/`FilterRef` are `Arc<dyn _>` trait objects that cannot derive
// `Debug`, so `Bindings` is formatted by hand, printing the bound names like
// `TagLibrary`'s own `Debug` impl in `tagkit-registry`.
impl std::fmt::Debug for Bindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        let mut filters: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        tags.sort_unstable();
        filters.sort_unstable();
        f.debug_struct("Bindings")
            .field("tags", &tags)
            .field("filters", &filters)
            .finish()
    }
}

impl Bindings {
    /// Bound tags.
    #[must_use]
    pub fn tags(&self) -> &HashMap<String, TagRef> {
        &self.tags
    }

    /// Bound filters.
    #[must_use]
    pub fn filters(&self) -> &HashMap<String, FilterRef> {
        &self.filters
    }

    /// True if the request bound nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.filters.is_empty()
    }
}

/// Enclosing path of a package id: everything before the final segment.
fn enclosing_path(package: &str) -> &str {
    package.rsplit_once('.').map_or("", |(head, _)| head)
}

/// Whether the enclosing path's tail, taken at the qualifier's segment
/// count, equals the qualifier.
fn tail_matches(enclosing: &str, qualifier: &str) -> bool {
    let segments: Vec<&str> = enclosing.split('.').collect();
    let depth = qualifier.split('.').count();
    if segments.len() < depth {
        return false;
    }
    segments[segments.len() - depth..].join(".") == qualifier
}

/// Locate the library named `source` across all discoverable packages.
///
/// `qualifier` constrains the search to packages under a matching enclosing
/// path; see the module docs for the precedence rules.
///
/// # Errors
///
/// Returns [`LoadError::LibraryNotFound`] with every attempted candidate id
/// when no package provides `source`.
pub fn find_library(
    registry: &dyn LibraryRegistry,
    source: &str,
    qualifier: Option<&str>,
) -> Result<TagLibrary, LoadError> {
    let mut best_partial: Option<(String, TagLibrary)> = None;
    let mut last: Option<(String, TagLibrary)> = None;
    let mut tried = Vec::new();

    for package in registry.package_ids() {
        let candidate = format!("{package}.{source}");
        tried.push(candidate.clone());

        let Some(library) = registry.load(&candidate) else {
            continue;
        };

        if let Some(qualifier) = qualifier {
            let enclosing = enclosing_path(&package);
            if enclosing == qualifier {
                tracing::debug!(
                    source,
                    qualifier,
                    candidate = %candidate,
                    "Resolved tag library by exact qualifier match"
                );
                return Ok(library);
            }
            if tail_matches(enclosing, qualifier) {
                best_partial = Some((candidate.clone(), library.clone()));
            }
        }

        last = Some((candidate, library));
    }

    if let Some((candidate, library)) = best_partial {
        tracing::debug!(
            source,
            candidate = %candidate,
            "Resolved tag library by partial qualifier match"
        );
        return Ok(library);
    }

    if let Some((candidate, library)) = last {
        if let Some(qualifier) = qualifier {
            // Compatibility: an unmatched qualifier degrades to the default
            // last-found search instead of failing.
            tracing::warn!(
                source,
                qualifier,
                candidate = %candidate,
                "Qualifier matched no package, falling back to last discovered library"
            );
        } else {
            tracing::debug!(source, candidate = %candidate, "Resolved tag library");
        }
        return Ok(library);
    }

    Err(LoadError::LibraryNotFound {
        source: source.to_owned(),
        tried,
    })
}

/// Rebind every entry to the same new name.
///
/// With more than one entry the surviving value is whichever iterates last —
/// callers hit this only through the wildcard-plus-rename quirk.
fn rename_all<V>(map: HashMap<String, V>, name: &str) -> HashMap<String, V> {
    map.into_values().map(|v| (name.to_owned(), v)).collect()
}

/// Rewrite every key as `prefix.key`.
fn prefix_all<V>(map: HashMap<String, V>, prefix: &str) -> HashMap<String, V> {
    map.into_iter()
        .map(|(name, v)| (format!("{prefix}.{name}"), v))
        .collect()
}

/// Resolve one request and compute its final bindings.
///
/// Applies, in order: symbol selection, rename, namespace prefix. Selection
/// and rebinding treat the tag and filter namespaces uniformly.
///
/// # Errors
///
/// Returns [`LoadError::LibraryNotFound`] when the source does not resolve,
/// or [`LoadError::SymbolNotFound`] when a named symbol is absent from the
/// resolved library.
pub fn bind(registry: &dyn LibraryRegistry, request: &LoadRequest) -> Result<Bindings, LoadError> {
    let library = find_library(
        registry,
        &request.source,
        request.source_qualifier.as_deref(),
    )?;

    let (mut tags, mut filters) = match &request.symbols {
        SymbolSelector::All => (library.tags().clone(), library.filters().clone()),
        SymbolSelector::Named(name) => {
            let mut tags = HashMap::new();
            let mut filters = HashMap::new();
            if let Some(handler) = library.tag(name) {
                tags.insert(name.clone(), Arc::clone(handler));
            }
            if let Some(handler) = library.filter(name) {
                filters.insert(name.clone(), Arc::clone(handler));
            }
            if tags.is_empty() && filters.is_empty() {
                return Err(LoadError::SymbolNotFound {
                    symbol: name.clone(),
                    source: request.source.clone(),
                });
            }
            (tags, filters)
        }
    };

    if let Some(new_name) = &request.rename_to {
        tags = rename_all(tags, new_name);
        filters = rename_all(filters, new_name);
    }

    if let Some(prefix) = &request.scope_prefix {
        tags = prefix_all(tags, prefix);
        filters = prefix_all(filters, prefix);
    }

    Ok(Bindings { tags, filters })
}
