//! Factories producing cached native formatter handles.
//!
//! A factory merges its default configuration with per-call overrides,
//! resolves every symbolic option into native constants and looks the result
//! up in its [`FormatterCache`](crate::cache::FormatterCache). Handles are
//! shared: callers must treat them as read-only.

mod date;
mod number;

pub use date::{DateCacheKey, DateFactory, DateOverrides};
pub use number::{AttributeKey, NumberCacheKey, NumberFactory};
