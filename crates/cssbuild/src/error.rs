//! Error types for selector building.
//!
//! Both errors signal a structural mistake in the order or multiplicity of
//! fragment calls on one builder. They are programmer errors rather than
//! data errors: the failed chain cannot be resumed.

use thiserror::Error;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{SelectorError, class};
///
/// // id comes before class in a selector, never after
/// let result = class("container").id("main");
/// assert_eq!(result.unwrap_err(), SelectorError::OutOfOrder);
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton fragment kind was supplied a second time.
    ///
    /// Element, id, and pseudo-element are singletons; classes, attributes,
    /// and pseudo-classes may repeat.
    #[error("element, id, and pseudo-element may each occur at most once per selector")]
    Duplicate,

    /// A fragment was supplied after a higher-ranked kind.
    ///
    /// The rank order is fixed by CSS compound-selector structure.
    #[error(
        "selector parts must appear in the order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder,
}
