//! # Logger tags.
//!
//! A tag is the short identifier printed next to every log line. It is either
//! derived from a type name or given explicitly.
//!
//! ## Derivation
//! ```text
//! type_name::<T>()                      → tag
//! "my_app::net::HttpClient"             → "HttpClient"
//! "my_app::cache::Lru<alloc::string::String>" → "Lru"
//! "my_app::VeryLongComponentNameForTesting"   → "VeryLongComponentNameFo" (23 chars)
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::LoggingError;

/// Types that log under a tag derived from their own type name.
///
/// Override [`logger_tag`](Self::logger_tag) to pick a fixed tag. The tag
/// limit is applied by the context, not here.
///
/// ## Example
/// ```rust
/// use droid_logging::Tagged;
///
/// struct SyncWorker;
/// impl Tagged for SyncWorker {}
///
/// assert_eq!(SyncWorker.logger_tag(), "SyncWorker");
/// ```
pub trait Tagged {
    /// Tag used by loggers created for this value.
    fn logger_tag(&self) -> Cow<'static, str> {
        Cow::Owned(tag_for::<Self>(None))
    }
}

/// Derives a tag for `T`, truncated to `limit` chars.
pub fn tag_for<T: ?Sized>(limit: Option<usize>) -> String {
    tag_from_type_name(std::any::type_name::<T>(), limit)
}

/// Derives a tag from a `type_name` string: last path segment, generics
/// stripped, truncated to `limit` chars.
pub fn tag_from_type_name(type_name: &str, limit: Option<usize>) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let simple = base.rsplit("::").next().unwrap_or(base);
    let simple = simple.trim_start_matches(['&', '*', '[', '(']);
    truncate_chars(simple, limit).to_string()
}

/// Validates an explicit tag against `limit`.
pub fn validate_tag(tag: &str, limit: Option<usize>) -> Result<Arc<str>, LoggingError> {
    if tag.is_empty() {
        return Err(LoggingError::EmptyTag);
    }
    if let Some(max) = limit {
        let len = tag.chars().count();
        if len > max {
            return Err(LoggingError::TagTooLong {
                tag: tag.to_string(),
                len,
                max,
            });
        }
    }
    Ok(Arc::from(tag))
}

/// Cuts `s` to at most `limit` chars, on a char boundary.
pub(crate) fn truncate_chars(s: &str, limit: Option<usize>) -> &str {
    match limit.and_then(|max| s.char_indices().nth(max)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
