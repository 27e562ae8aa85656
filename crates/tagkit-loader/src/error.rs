//! Loader error types.

/// Error raised while parsing or applying a loading directive.
///
/// All parser and resolver failures surface through this type; the host
/// engine reports them as template-compilation failures.
//
// NOTE: `Display`/`Error` are implemented by hand rather than via
// `#[derive(thiserror::Error)]`. The spec (§7) names the library-identity
// field `source` on two variants; thiserror unconditionally treats any
// field literally named `source` as the error source and emits
// `source.as_dyn_error()`, which does not compile because `String` is not
// `std::error::Error`. The impls below reproduce exactly what the derive
// would have generated for these leaf errors (identical messages, no
// underlying source).
#[derive(Debug)]
pub enum LoadError {
    /// Malformed directive token stream.
    ///
    /// Covers every token-stream underrun (a modifier keyword with no value,
    /// an unterminated wildcard-import form) with an explicit message naming
    /// the directive and the expected token.
    Syntax {
        /// Directive keyword being parsed.
        directive: &'static str,
        /// Description of the expected token.
        expected: String,
    },

    /// No discoverable package provides the requested library.
    ///
    /// `tried` lists every candidate id the search attempted, in order.
    LibraryNotFound {
        /// Requested library name.
        source: String,
        /// All attempted candidate ids.
        tried: Vec<String>,
    },

    /// The library resolved, but does not export the requested symbol.
    SymbolNotFound {
        /// Requested symbol name.
        symbol: String,
        /// Library the symbol was looked up in.
        source: String,
    },

    /// No handler is registered for the directive keyword.
    UnknownDirective {
        /// Keyword found at the start of the directive.
        keyword: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Syntax {
                directive,
                expected,
            } => write!(
                f,
                "malformed '{directive}' directive: expected {expected}"
            ),
            LoadError::LibraryNotFound { source, tried } => write!(
                f,
                "tag library '{source}' not found, tried: {}",
                tried.join(", ")
            ),
            LoadError::SymbolNotFound { symbol, source } => write!(
                f,
                "'{symbol}' is not a valid tag or filter in library '{source}'"
            ),
            LoadError::UnknownDirective { keyword } => {
                write!(f, "unknown directive '{keyword}'")
            }
        }
    }
}

impl std::error::Error for LoadError {}
