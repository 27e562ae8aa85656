//! Directive-argument parsing and tag-library resolution for tagkit
//! templates.
//!
//! This crate implements the `load` and `import` template directives: a
//! richer replacement for the classic single-keyword library-loading
//! directive, with per-source qualification (`from`), symbol renaming
//! (`as`) and namespacing (`into` / auto-namespaced imports).
//!
//! ```text
//! {% load <ref> [from <qualifier>] [as <name>] [into <namespace>] [, ...] %}
//! {% import <ref> [as <name>] [from <qualifier>] [, ...] %}
//! {% import * from <ref> [as <namespace>] [from <qualifier>] [, ...] %}
//! ```
//!
//! where `<ref>` is `name` or `name.symbol`.
//!
//! # Architecture
//!
//! Processing is a three-stage pipeline, run to completion per directive:
//!
//! 1. [`TokenCursor`] + the grammar functions [`parse_load`] /
//!    [`parse_import`] turn the raw token stream into an ordered sequence
//!    of [`LoadRequest`] records.
//! 2. [`bind`] resolves each request against a
//!    [`LibraryRegistry`](tagkit_registry::LibraryRegistry) (best-match
//!    search over discoverable packages) and computes the final
//!    [`Bindings`] via a pure narrow → rename → prefix transform.
//! 3. The bindings merge into the invocation's [`ParseContext`]
//!    (last-writer-wins), and the directive yields a no-op
//!    [`DirectiveNode`].
//!
//! Libraries are re-resolved on every invocation; nothing is cached.
//!
//! # Example
//!
//! ```
//! use tagkit_loader::{DirectiveSet, ParseContext};
//! use tagkit_registry::{MemoryRegistry, TagLibrary};
//!
//! let registry = MemoryRegistry::new()
//!     .with_library(
//!         "shop.taglibs",
//!         "cart",
//!         TagLibrary::new().with_tag("total", |_: &[String]| "42".to_owned()),
//!     );
//!
//! let directives = DirectiveSet::standard();
//! let mut ctx = ParseContext::new();
//! directives
//!     .parse_directive("load cart.total as cart_total", &registry, &mut ctx)
//!     .unwrap();
//!
//! let tag = ctx.tag("cart_total").unwrap();
//! assert_eq!(tag.render(&[]), "42");
//! ```

mod cursor;
mod directive;
mod error;
mod parse;
mod request;
mod resolve;
mod scope;

pub use cursor::TokenCursor;
pub use directive::{DirectiveHandler, DirectiveNode, DirectiveSet, ImportDirective, LoadDirective};
pub use error::LoadError;
pub use parse::{parse_import, parse_load};
pub use request::{LoadRequest, SymbolSelector};
pub use resolve::{Bindings, bind, find_library};
pub use scope::ParseContext;
