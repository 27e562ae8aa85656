//! Tag library and registry abstraction for tagkit template directives.
//!
//! This crate provides the symbol-table side of template directive loading:
//!
//! - [`TagHandler`] and [`FilterHandler`] traits for the callables a template
//!   engine invokes at render time
//! - [`TagLibrary`], the exported symbol table of one loadable library
//!   (name-keyed tags and filters)
//! - [`LibraryRegistry`], a trait abstracting library discovery and lookup
//!   so loaders can be tested without a real host application
//! - [`MemoryRegistry`], an in-memory registry backend for embedders
//!   and tests
//!
//! # Module Id Convention
//!
//! Libraries are addressed by dotted ids of the form `<package>.<name>`,
//! where `<package>` is a discoverable search root (e.g. `app1.taglibs`)
//! and `<name>` is the library name within it. The final segment of a
//! package id is the tag-library folder; the segments before it identify
//! the enclosing application, which is what qualifier matching in the
//! loader compares against.
//!
//! # Example
//!
//! ```
//! use tagkit_registry::{LibraryRegistry, MemoryRegistry, TagLibrary};
//!
//! let lib = TagLibrary::new()
//!     .with_tag("now", |_: &[String]| "2026-08-07".to_owned());
//! let registry = MemoryRegistry::new().with_library("app.taglibs", "dates", lib);
//!
//! let found = registry.load("app.taglibs.dates").unwrap();
//! assert!(found.tag("now").is_some());
//! ```

mod library;
mod memory;
mod registry;

pub use library::{FilterHandler, FilterRef, TagHandler, TagLibrary, TagRef};
pub use memory::MemoryRegistry;
pub use registry::LibraryRegistry;
