//! Directive keyword dispatch.
//!
//! Binds the `load` and `import` keywords to the parse → resolve → merge
//! pipeline. A loading directive mutates the [`ParseContext`] as a side
//! effect and contributes nothing to the rendered output, so dispatch
//! returns the no-op [`DirectiveNode`].

use tagkit_registry::LibraryRegistry;

use crate::cursor::TokenCursor;
use crate::error::LoadError;
use crate::parse::{parse_import, parse_load};
use crate::request::LoadRequest;
use crate::resolve::bind;
use crate::scope::ParseContext;

/// Render node produced by a loading directive.
///
/// Loading happens at compile time; at render time the node emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveNode;

impl DirectiveNode {
    /// Render the node: always the empty string.
    #[must_use]
    pub fn render(&self) -> &'static str {
        ""
    }
}

/// A directive recognized by a [`DirectiveSet`].
pub trait DirectiveHandler: Send + Sync {
    /// Keyword that selects this handler (the first directive token).
    fn keyword(&self) -> &'static str;

    /// Parse the remaining tokens and apply the directive's effect.
    fn parse(
        &self,
        cursor: &mut TokenCursor,
        registry: &dyn LibraryRegistry,
        ctx: &mut ParseContext,
    ) -> Result<DirectiveNode, LoadError>;
}

/// Resolve each request in order and merge its bindings into the context.
///
/// A request merges only after it fully resolves; a failure aborts the
/// remaining requests without rolling back earlier ones.
fn apply_requests(
    requests: &[LoadRequest],
    registry: &dyn LibraryRegistry,
    ctx: &mut ParseContext,
) -> Result<(), LoadError> {
    for request in requests {
        let bindings = bind(registry, request)?;
        ctx.merge(bindings);
    }
    Ok(())
}

/// The `load` directive: references with `from` / `as` / `into` modifiers.
pub struct LoadDirective;

impl DirectiveHandler for LoadDirective {
    fn keyword(&self) -> &'static str {
        "load"
    }

    fn parse(
        &self,
        cursor: &mut TokenCursor,
        registry: &dyn LibraryRegistry,
        ctx: &mut ParseContext,
    ) -> Result<DirectiveNode, LoadError> {
        let requests = parse_load(cursor)?;
        apply_requests(&requests, registry, ctx)?;
        Ok(DirectiveNode)
    }
}

/// The `import` directive: auto-namespaced and wildcard imports.
pub struct ImportDirective;

impl DirectiveHandler for ImportDirective {
    fn keyword(&self) -> &'static str {
        "import"
    }

    fn parse(
        &self,
        cursor: &mut TokenCursor,
        registry: &dyn LibraryRegistry,
        ctx: &mut ParseContext,
    ) -> Result<DirectiveNode, LoadError> {
        let requests = parse_import(cursor)?;
        apply_requests(&requests, registry, ctx)?;
        Ok(DirectiveNode)
    }
}

/// Keyword → handler dispatch for loading directives.
///
/// # Example
///
/// ```
/// use tagkit_loader::{DirectiveSet, ParseContext};
/// use tagkit_registry::{MemoryRegistry, TagLibrary};
///
/// let registry = MemoryRegistry::new().with_library(
///     "app.taglibs",
///     "lib1",
///     TagLibrary::new().with_tag("tag1", |_: &[String]| "hi".to_owned()),
/// );
///
/// let directives = DirectiveSet::standard();
/// let mut ctx = ParseContext::new();
///
/// let node = directives
///     .parse_directive("import lib1", &registry, &mut ctx)
///     .unwrap();
/// assert_eq!(node.render(), "");
/// assert!(ctx.tag("lib1.tag1").is_some());
/// ```
#[derive(Default)]
pub struct DirectiveSet {
    handlers: Vec<Box<dyn DirectiveHandler>>,
}

impl DirectiveSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard set: `load` and `import`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_handler(LoadDirective)
            .with_handler(ImportDirective)
    }

    /// Register a directive handler.
    #[must_use]
    pub fn with_handler<H: DirectiveHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Parse one directive's full content (keyword plus arguments).
    ///
    /// Dispatches on the first token, lets the matching handler consume the
    /// rest and mutate `ctx`, and returns the no-op render node.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownDirective`] for an unrecognized keyword,
    /// or whatever the handler's parse and resolution raise. On error the
    /// directive contributes no further bindings.
    pub fn parse_directive(
        &self,
        content: &str,
        registry: &dyn LibraryRegistry,
        ctx: &mut ParseContext,
    ) -> Result<DirectiveNode, LoadError> {
        let mut cursor = TokenCursor::new(content);
        let Some(keyword) = cursor.pop() else {
            return Err(LoadError::Syntax {
                directive: "",
                expected: "a directive keyword".to_owned(),
            });
        };

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.keyword() == keyword)
            .ok_or(LoadError::UnknownDirective { keyword })?;

        handler.parse(&mut cursor, registry, ctx)
    }
}
