//! Resource path templates.
//!
//! Resource paths are written as templates with positional placeholders
//! that are resolved against call-site arguments before dispatch:
//!
//! - `{0}`, `{1}`, ... are replaced by the argument at that index
//! - `{{` and `}}` produce literal braces
//!
//! Values are inserted with their `Display` output; no percent-encoding is
//! applied.
//!
//! # Example
//!
//! ```rust
//! use shopify_catalog::rest::format_path;
//!
//! let path = format_path("/admin/orders/{0}.json", &[&123]).unwrap();
//! assert_eq!(path, "/admin/orders/123.json");
//!
//! let path = format_path("/admin/products/{0}/variants/{1}.json", &[&7, &"42"]).unwrap();
//! assert_eq!(path, "/admin/products/7/variants/42.json");
//! ```

use std::fmt::Display;

use thiserror::Error;

/// Error returned when a path template cannot be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathTemplateError {
    /// A placeholder refers to an argument that was not supplied.
    #[error("placeholder {{{index}}} has no matching argument ({supplied} supplied)")]
    MissingArgument {
        /// The placeholder index.
        index: usize,
        /// How many arguments were supplied.
        supplied: usize,
    },

    /// A placeholder is not a non-negative integer.
    #[error("placeholder {{{placeholder}}} is not a positional index")]
    InvalidPlaceholder {
        /// The text between the braces.
        placeholder: String,
    },

    /// A `{` or `}` is not part of a placeholder or escape.
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace {
        /// Byte offset of the offending brace.
        position: usize,
    },
}

/// Resolves a path template against positional arguments.
///
/// A template without a leading `/` is given one, so `admin/products.json`
/// and `/admin/products.json` resolve to the same path.
///
/// # Errors
///
/// Returns [`PathTemplateError`] if a placeholder is not a valid index,
/// refers to a missing argument, or a brace is unbalanced.
pub fn format_path(
    template: &str,
    args: &[&(dyn Display + Sync)],
) -> Result<String, PathTemplateError> {
    let mut result = String::with_capacity(template.len() + 1);
    if !template.starts_with('/') {
        result.push('/');
    }

    let mut chars = template.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let mut placeholder = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(inner);
                }
                if !closed {
                    return Err(PathTemplateError::UnbalancedBrace { position });
                }

                let index: usize = placeholder
                    .trim()
                    .parse()
                    .map_err(|_| PathTemplateError::InvalidPlaceholder {
                        placeholder: placeholder.clone(),
                    })?;
                let arg = args.get(index).ok_or(PathTemplateError::MissingArgument {
                    index,
                    supplied: args.len(),
                })?;
                result.push_str(&arg.to_string());
            }
            '}' => return Err(PathTemplateError::UnbalancedBrace { position }),
            other => result.push(other),
        }
    }

    Ok(result)
}
