//! Tag library symbol tables and handler traits.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A template tag callable.
///
/// Implementations receive the raw argument tokens that followed the tag in
/// the template source and produce the rendered output.
pub trait TagHandler: Send + Sync {
    /// Render the tag with the given argument tokens.
    fn render(&self, args: &[String]) -> String;
}

/// A template filter callable.
pub trait FilterHandler: Send + Sync {
    /// Apply the filter to an input value.
    fn apply(&self, input: &str) -> String;
}

impl<F> TagHandler for F
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn render(&self, args: &[String]) -> String {
        self(args)
    }
}

impl<F> FilterHandler for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, input: &str) -> String {
        self(input)
    }
}

/// Shared handle to a tag handler.
pub type TagRef = Arc<dyn TagHandler>;

/// Shared handle to a filter handler.
pub type FilterRef = Arc<dyn FilterHandler>;

/// Exported symbol table of one loadable tag library.
///
/// Holds two name-keyed namespaces: tags and filters. Registering under an
/// existing name overwrites the earlier entry (last-writer-wins), which is
/// also the merge semantics consumers rely on when the same name is loaded
/// twice.
///
/// # Example
///
/// ```
/// use tagkit_registry::TagLibrary;
///
/// let lib = TagLibrary::new()
///     .with_tag("greet", |_: &[String]| "hello".to_owned())
///     .with_filter("upper", |s: &str| s.to_uppercase());
///
/// assert!(lib.tag("greet").is_some());
/// assert!(lib.filter("upper").is_some());
/// ```
#[derive(Clone, Default)]
pub struct TagLibrary {
    tags: HashMap<String, TagRef>,
    filters: HashMap<String, FilterRef>,
}

impl TagLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tag handler, consuming and returning the library.
    #[must_use]
    pub fn with_tag<H: TagHandler + 'static>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.register_tag(name, handler);
        self
    }

    /// Register a filter handler, consuming and returning the library.
    #[must_use]
    pub fn with_filter<H: FilterHandler + 'static>(
        mut self,
        name: impl Into<String>,
        handler: H,
    ) -> Self {
        self.register_filter(name, handler);
        self
    }

    /// Register a tag handler under the given name.
    pub fn register_tag<H: TagHandler + 'static>(&mut self, name: impl Into<String>, handler: H) {
        self.tags.insert(name.into(), Arc::new(handler));
    }

    /// Register a filter handler under the given name.
    pub fn register_filter<H: FilterHandler + 'static>(
        &mut self,
        name: impl Into<String>,
        handler: H,
    ) {
        self.filters.insert(name.into(), Arc::new(handler));
    }

    /// Look up a tag by its registered name.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&TagRef> {
        self.tags.get(name)
    }

    /// Look up a filter by its registered name.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterRef> {
        self.filters.get(name)
    }

    /// All registered tags.
    #[must_use]
    pub fn tags(&self) -> &HashMap<String, TagRef> {
        &self.tags
    }

    /// All registered filters.
    #[must_use]
    pub fn filters(&self) -> &HashMap<String, FilterRef> {
        &self.filters
    }

    /// Merge another library into this one.
    ///
    /// Entries from `other` overwrite entries with the same name.
    pub fn merge(&mut self, other: &TagLibrary) {
        for (name, handler) in &other.tags {
            self.tags.insert(name.clone(), Arc::clone(handler));
        }
        for (name, handler) in &other.filters {
            self.filters.insert(name.clone(), Arc::clone(handler));
        }
    }

    /// True if the library exports no tags and no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.filters.is_empty()
    }
}

impl fmt::Debug for TagLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        let mut filters: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        tags.sort_unstable();
        filters.sort_unstable();
        f.debug_struct("TagLibrary")
            .field("tags", &tags)
            .field("filters", &filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(output: &'static str) -> impl Fn(&[String]) -> String {
        move |_: &[String]| output.to_owned()
    }

    #[test]
    fn test_empty_library() {
        let lib = TagLibrary::new();
        assert!(lib.is_empty());
        assert!(lib.tag("anything").is_none());
        assert!(lib.filter("anything").is_none());
    }

    #[test]
    fn test_register_and_render_tag() {
        let lib = TagLibrary::new().with_tag("greet", tag("hello"));

        let handler = lib.tag("greet").unwrap();
        assert_eq!(handler.render(&[]), "hello");
    }

    #[test]
    fn test_register_and_apply_filter() {
        let lib = TagLibrary::new().with_filter("upper", |s: &str| s.to_uppercase());

        let handler = lib.filter("upper").unwrap();
        assert_eq!(handler.apply("abc"), "ABC");
    }

    #[test]
    fn test_reregister_overwrites() {
        let lib = TagLibrary::new()
            .with_tag("greet", tag("first"))
            .with_tag("greet", tag("second"));

        assert_eq!(lib.tag("greet").unwrap().render(&[]), "second");
        assert_eq!(lib.tags().len(), 1);
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let mut base = TagLibrary::new()
            .with_tag("a", tag("base a"))
            .with_tag("b", tag("base b"));
        let other = TagLibrary::new()
            .with_tag("b", tag("other b"))
            .with_filter("f", |s: &str| s.to_owned());

        base.merge(&other);

        assert_eq!(base.tag("a").unwrap().render(&[]), "base a");
        assert_eq!(base.tag("b").unwrap().render(&[]), "other b");
        assert!(base.filter("f").is_some());
    }

    #[test]
    fn test_debug_lists_sorted_names() {
        let lib = TagLibrary::new()
            .with_tag("b", tag("x"))
            .with_tag("a", tag("y"))
            .with_filter("f", |s: &str| s.to_owned());

        let debug = format!("{lib:?}");
        assert_eq!(debug, r#"TagLibrary { tags: ["a", "b"], filters: ["f"] }"#);
    }
}
