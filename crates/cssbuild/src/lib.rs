//! # cssbuild - CSS Selector Builder
//!
//! A small toolkit for assembling CSS selector strings programmatically,
//! plus a couple of serialization helpers. The core is [`Selector`], a
//! builder that accumulates the parts of a compound selector while
//! enforcing the structural rules of CSS:
//!
//! - Parts must be supplied in the fixed order: element, id, class,
//!   attribute, pseudo-class, pseudo-element
//! - Element, id, and pseudo-element may each occur at most once
//! - Classes, attributes, and pseudo-classes may repeat
//!
//! The content of each part is passed through verbatim; this crate does not
//! validate CSS grammar, only structure.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssbuild::{combine, element, id};
//!
//! let link = element("a")
//!     .attr(r#"href$=".png""#).unwrap()
//!     .pseudo_class("focus").unwrap();
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let main = id("main").class("container").unwrap();
//! let inside = combine(&main, ">", &link);
//! assert_eq!(inside.stringify(), r#"#main.container > a[href$=".png"]:focus"#);
//! ```
//!
//! ## Building selectors
//!
//! Each of [`element`], [`id`], [`class`], [`attr`], [`pseudo_class`], and
//! [`pseudo_element`] starts a fresh [`Selector`]; the same six names exist
//! as chained methods returning `Result`, so a chain composes with `?`.
//! [`combine`] joins two finished selectors with a combinator token (` `,
//! `>`, `+`, `~`, or anything else - the token is not validated). The
//! operands are rendered at combine time, so mutating them afterwards does
//! not affect the combined selector.
//!
//! ## Modules
//!
//! - [`selector`]: The [`Selector`] builder and facade functions
//! - [`geometry`]: A plain [`Rectangle`](geometry::Rectangle) data type
//! - [`json`]: Generic JSON encode/decode helpers
//! - [`error`]: The [`SelectorError`] kinds a build chain can fail with

pub mod error;
pub mod geometry;
pub mod json;
pub mod selector;

pub use error::SelectorError;
pub use selector::{Selector, attr, class, combine, element, id, pseudo_class, pseudo_element};
