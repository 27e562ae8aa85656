//! Library discovery and lookup trait.

use crate::library::TagLibrary;

/// Discovery and lookup interface for loadable tag libraries.
///
/// A registry knows a set of *packages* (search roots, e.g. one per
/// installed application) and can load a library by its fully qualified
/// dotted id `<package>.<name>`. Loaders assemble candidate ids from the
/// enumerated packages and a requested library name, so enumeration order
/// is observable: when the same library name exists in several packages,
/// later packages shadow earlier ones by default.
///
/// Lookups are synchronous, side-effect-free reads. A missing library is
/// signalled by `None`, not an error; the loader decides how to report it.
pub trait LibraryRegistry: Send + Sync {
    /// Dotted ids of all discoverable tag-library packages, in search order.
    fn package_ids(&self) -> Vec<String>;

    /// Load the library with the given fully qualified id.
    ///
    /// Returns `None` if no library is registered under `id`.
    fn load(&self, id: &str) -> Option<TagLibrary>;
}
