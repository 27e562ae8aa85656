//! In-memory registry backend.
//!
//! Provides [`MemoryRegistry`] for embedders that register libraries
//! programmatically and for loader tests that need a controlled set of
//! discoverable packages.

use std::collections::HashMap;

use crate::library::TagLibrary;
use crate::registry::LibraryRegistry;

/// In-memory [`LibraryRegistry`] backend.
///
/// Packages are enumerated in registration order, so a library name that
/// exists in several packages is shadowed by the package registered last —
/// the same search semantics a host application gets from its installed-app
/// ordering.
///
/// # Example
///
/// ```
/// use tagkit_registry::{LibraryRegistry, MemoryRegistry, TagLibrary};
///
/// let registry = MemoryRegistry::new()
///     .with_library("app1.taglibs", "lib1", TagLibrary::new())
///     .with_library("app2.taglibs", "lib1", TagLibrary::new());
///
/// assert_eq!(registry.package_ids(), ["app1.taglibs", "app2.taglibs"]);
/// assert!(registry.load("app2.taglibs.lib1").is_some());
/// assert!(registry.load("app2.taglibs.lib2").is_none());
/// ```
#[derive(Default)]
pub struct MemoryRegistry {
    /// Packages in registration order; order is the search order.
    packages: Vec<(String, HashMap<String, TagLibrary>)>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a library, consuming and returning the registry.
    #[must_use]
    pub fn with_library(
        mut self,
        package: impl Into<String>,
        name: impl Into<String>,
        library: TagLibrary,
    ) -> Self {
        self.add_library(package, name, library);
        self
    }

    /// Register a library under `package` with the given name.
    ///
    /// Registering the same name twice in one package replaces the earlier
    /// library and logs a warning.
    pub fn add_library(
        &mut self,
        package: impl Into<String>,
        name: impl Into<String>,
        library: TagLibrary,
    ) {
        let package = package.into();
        let name = name.into();

        let idx = match self.packages.iter().position(|(id, _)| *id == package) {
            Some(idx) => idx,
            None => {
                self.packages.push((package.clone(), HashMap::new()));
                self.packages.len() - 1
            }
        };

        if self.packages[idx].1.insert(name.clone(), library).is_some() {
            tracing::warn!(
                package = %package,
                library = %name,
                "Library name registered twice in one package, replacing earlier entry"
            );
        }
    }
}

impl LibraryRegistry for MemoryRegistry {
    fn package_ids(&self) -> Vec<String> {
        self.packages.iter().map(|(id, _)| id.clone()).collect()
    }

    fn load(&self, id: &str) -> Option<TagLibrary> {
        for (package, libs) in &self.packages {
            let Some(rest) = id.strip_prefix(package.as_str()) else {
                continue;
            };
            let Some(name) = rest.strip_prefix('.') else {
                continue;
            };
            if let Some(library) = libs.get(name) {
                return Some(library.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lib_with_tag(name: &'static str, output: &'static str) -> TagLibrary {
        TagLibrary::new().with_tag(name, move |_: &[String]| output.to_owned())
    }

    #[test]
    fn test_empty_registry() {
        let registry = MemoryRegistry::new();
        assert!(registry.package_ids().is_empty());
        assert!(registry.load("app.taglibs.lib").is_none());
    }

    #[test]
    fn test_package_ids_in_registration_order() {
        let registry = MemoryRegistry::new()
            .with_library("b.taglibs", "lib", TagLibrary::new())
            .with_library("a.taglibs", "lib", TagLibrary::new())
            .with_library("b.taglibs", "other", TagLibrary::new());

        assert_eq!(registry.package_ids(), ["b.taglibs", "a.taglibs"]);
    }

    #[test]
    fn test_load_by_qualified_id() {
        let registry = MemoryRegistry::new()
            .with_library("app1.taglibs", "lib1", lib_with_tag("tag1", "app1 lib1"))
            .with_library("app2.taglibs", "lib1", lib_with_tag("tag1", "app2 lib1"));

        let lib = registry.load("app1.taglibs.lib1").unwrap();
        assert_eq!(lib.tag("tag1").unwrap().render(&[]), "app1 lib1");

        let lib = registry.load("app2.taglibs.lib1").unwrap();
        assert_eq!(lib.tag("tag1").unwrap().render(&[]), "app2 lib1");
    }

    #[test]
    fn test_load_unknown_library() {
        let registry =
            MemoryRegistry::new().with_library("app1.taglibs", "lib1", TagLibrary::new());

        assert!(registry.load("app1.taglibs.lib2").is_none());
        assert!(registry.load("app2.taglibs.lib1").is_none());
        // A package id alone is not a library id.
        assert!(registry.load("app1.taglibs").is_none());
    }

    #[test]
    fn test_similar_package_prefix_not_confused() {
        let registry = MemoryRegistry::new()
            .with_library("app.taglibs", "lib", lib_with_tag("t", "short"))
            .with_library("app.taglibs2", "lib", lib_with_tag("t", "long"));

        let lib = registry.load("app.taglibs2.lib").unwrap();
        assert_eq!(lib.tag("t").unwrap().render(&[]), "long");
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let registry = MemoryRegistry::new()
            .with_library("app.taglibs", "lib", lib_with_tag("t", "first"))
            .with_library("app.taglibs", "lib", lib_with_tag("t", "second"));

        let lib = registry.load("app.taglibs.lib").unwrap();
        assert_eq!(lib.tag("t").unwrap().render(&[]), "second");
        assert_eq!(registry.package_ids().len(), 1);
    }
}
