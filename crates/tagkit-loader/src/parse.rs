//! Directive argument grammars.
//!
//! Two grammars share the `name[.symbol]` reference sub-rule:
//!
//! ```text
//! load   <ref> [from <qualifier>] [as <name>] [into <namespace>] [, <ref> ...]
//! import <ref> [as <name>] [from <qualifier>] [, ...]
//! import * from <ref> [as <namespace>] [from <qualifier>] [, ...]
//! ```
//!
//! Modifier scanning is greedy and order-insensitive; a repeated modifier
//! keyword overwrites the earlier value. The first token that is not a
//! recognized modifier keyword is pushed back and starts the next clause.

use crate::cursor::TokenCursor;
use crate::error::LoadError;
use crate::request::LoadRequest;

/// Consume the value token that must follow a modifier keyword.
fn expect_value(
    cursor: &mut TokenCursor,
    directive: &'static str,
    keyword: &str,
) -> Result<String, LoadError> {
    cursor.pop().ok_or_else(|| LoadError::Syntax {
        directive,
        expected: format!("a value after '{keyword}'"),
    })
}

/// Parse the argument stream of a `load` directive.
///
/// Yields one [`LoadRequest`] per reference clause, in source order, and
/// consumes the entire stream.
pub fn parse_load(cursor: &mut TokenCursor) -> Result<Vec<LoadRequest>, LoadError> {
    let mut requests = Vec::new();

    while let Some(token) = cursor.pop() {
        let mut request = LoadRequest::from_reference(&token);

        while let Some(modifier) = cursor.pop() {
            match modifier.as_str() {
                "from" => request.source_qualifier = Some(expect_value(cursor, "load", "from")?),
                "as" => request.rename_to = Some(expect_value(cursor, "load", "as")?),
                "into" => request.scope_prefix = Some(expect_value(cursor, "load", "into")?),
                _ => {
                    cursor.push_back(modifier);
                    break;
                }
            }
        }

        requests.push(request);
    }

    Ok(requests)
}

/// Parse the argument stream of an `import` directive.
///
/// Two clause forms:
///
/// - `* from <ref>` — wildcard import, no initial namespace.
/// - `<ref>` — named import; the namespace starts as the source name, so
///   imported symbols live under `source.` unless `as` overrides it.
///
/// For a wildcard selector `as` renames the namespace; for a single-symbol
/// selector it renames the symbol flat and drops the namespace.
pub fn parse_import(cursor: &mut TokenCursor) -> Result<Vec<LoadRequest>, LoadError> {
    let mut requests = Vec::new();

    while let Some(token) = cursor.pop() {
        let mut request = if token == "*" {
            match cursor.pop() {
                Some(keyword) if keyword == "from" => {}
                _ => {
                    return Err(LoadError::Syntax {
                        directive: "import",
                        expected: "'from' after '*'".to_owned(),
                    });
                }
            }
            let reference = expect_value(cursor, "import", "from")?;
            LoadRequest::from_reference(&reference)
        } else {
            let mut request = LoadRequest::from_reference(&token);
            request.scope_prefix = Some(request.source.clone());
            request
        };

        while let Some(modifier) = cursor.pop() {
            match modifier.as_str() {
                "as" => {
                    let value = expect_value(cursor, "import", "as")?;
                    if request.symbols.is_all() {
                        request.scope_prefix = Some(value);
                    } else {
                        request.scope_prefix = None;
                        request.rename_to = Some(value);
                    }
                }
                "from" => request.source_qualifier = Some(expect_value(cursor, "import", "from")?),
                _ => {
                    cursor.push_back(modifier);
                    break;
                }
            }
        }

        requests.push(request);
    }

    Ok(requests)
}
