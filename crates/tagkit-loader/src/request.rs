//! Load request model.
//!
//! A directive invocation parses into an ordered sequence of [`LoadRequest`]
//! records, each describing one library to resolve and how its symbols are
//! rebound into the destination scope.

/// Which of a library's exported symbols a request selects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolSelector {
    /// Load every exported symbol.
    All,
    /// Load the single symbol with this registered name.
    Named(String),
}

impl SymbolSelector {
    /// True for the wildcard selector.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// One parsed loading clause.
///
/// Produced by the `load`/`import` grammars and consumed by the resolver.
/// Requests are built fresh per directive invocation, applied in order, and
/// discarded.
///
/// `rename_to` and `scope_prefix` are not mutually exclusive: a rename
/// applies to the selected symbol first, and a prefix then wraps the renamed
/// key (`load lib.tag from app into ns as x` binds `ns.x`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    /// Name of the library to load from.
    pub source: String,
    /// Which symbols to select from the resolved library.
    pub symbols: SymbolSelector,
    /// New name to bind the selected symbol(s) under, replacing the
    /// registered name.
    pub rename_to: Option<String>,
    /// Namespace prefix; bound names become `prefix.name`.
    pub scope_prefix: Option<String>,
    /// Enclosing-path fragment disambiguating between same-named libraries
    /// from different packages.
    pub source_qualifier: Option<String>,
}

impl LoadRequest {
    /// Build a request from a `name` or `name.symbol` reference token.
    ///
    /// The token splits on the first `.`; without a dot the request selects
    /// every exported symbol.
    #[must_use]
    pub fn from_reference(token: &str) -> Self {
        let (source, symbols) = match token.split_once('.') {
            Some((source, symbol)) => (source, SymbolSelector::Named(symbol.to_owned())),
            None => (token, SymbolSelector::All),
        };
        Self {
            source: source.to_owned(),
            symbols,
            rename_to: None,
            scope_prefix: None,
            source_qualifier: None,
        }
    }
}
