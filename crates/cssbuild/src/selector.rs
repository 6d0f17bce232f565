//! The [`Selector`] builder and its facade functions.
//!
//! A selector is assembled from fragments of a compound selector (element,
//! id, classes, attributes, pseudo-classes, pseudo-element) in a fixed call
//! order, then rendered with [`Selector::stringify`]. [`combine`] joins two
//! rendered selectors with a combinator token.

use std::fmt;

use crate::error::SelectorError;

/// The fragment kinds of a compound selector, in required order.
///
/// Derived `Ord` gives each kind its rank; a builder tracks the highest
/// rank seen so far and rejects any fragment below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Part {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

/// Builder for a single compound (or combined) CSS selector.
///
/// Create one through the facade functions ([`element`], [`id`], [`class`],
/// [`attr`], [`pseudo_class`], [`pseudo_element`], [`combine`]) and extend
/// it through the chained methods of the same names. Each facade call
/// starts an independent builder; no state is shared between chains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Highest rank added so far; never decreases.
    stage: Option<Part>,
    /// Combinator suffix, set only by [`combine`].
    trailer: Option<String>,
}

impl Selector {
    /// Create an empty builder. Renders as `""` until a fragment is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the call if it repeats a singleton kind or arrives after a
    /// higher-ranked kind. The duplicate check runs first.
    fn check(&self, part: Part) -> Result<(), SelectorError> {
        let occupied = match part {
            Part::Element => self.element.is_some(),
            Part::Id => self.id.is_some(),
            Part::PseudoElement => self.pseudo_element.is_some(),
            Part::Class | Part::Attribute | Part::PseudoClass => false,
        };
        if occupied {
            return Err(SelectorError::Duplicate);
        }
        if self.stage > Some(part) {
            return Err(SelectorError::OutOfOrder);
        }
        Ok(())
    }

    /// Store an already-checked fragment and advance the stage.
    fn store(&mut self, part: Part, value: &str) {
        match part {
            Part::Element => self.element = Some(value.to_string()),
            Part::Id => self.id = Some(format!("#{value}")),
            Part::Class => self.classes.push(format!(".{value}")),
            Part::Attribute => self.attributes.push(format!("[{value}]")),
            Part::PseudoClass => self.pseudo_classes.push(format!(":{value}")),
            Part::PseudoElement => self.pseudo_element = Some(format!("::{value}")),
        }
        self.stage = Some(part);
    }

    fn add(mut self, part: Part, value: &str) -> Result<Self, SelectorError> {
        self.check(part)?;
        self.store(part, value);
        Ok(self)
    }

    /// Set the element (type) name. At most one per selector; must come
    /// before every other kind.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::Element, value)
    }

    /// Set the id, stored as `#value`. At most one per selector.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::Id, value)
    }

    /// Append a class, stored as `.value`. May repeat.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::Class, value)
    }

    /// Append an attribute expression, stored as `[value]`. May repeat.
    /// The expression itself is not validated.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::Attribute, value)
    }

    /// Append a pseudo-class, stored as `:value`. May repeat.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::PseudoClass, value)
    }

    /// Set the pseudo-element, stored as `::value`. At most one per
    /// selector; must come after every other kind.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.add(Part::PseudoElement, value)
    }

    /// Render the selector.
    ///
    /// Pure and repeatable. Parts appear in fixed kind order regardless of
    /// interleaving within the chain; repeated kinds keep call order.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            f.write_str(id)?;
        }
        for class in &self.classes {
            f.write_str(class)?;
        }
        for attribute in &self.attributes {
            f.write_str(attribute)?;
        }
        for pseudo_class in &self.pseudo_classes {
            f.write_str(pseudo_class)?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            f.write_str(pseudo_element)?;
        }
        if let Some(trailer) = &self.trailer {
            f.write_str(trailer)?;
        }
        Ok(())
    }
}

/// Start a selector with an element (type) name, e.g. `element("a")`.
pub fn element(value: &str) -> Selector {
    start(Part::Element, value)
}

/// Start a selector with an id, e.g. `id("main")` for `#main`.
pub fn id(value: &str) -> Selector {
    start(Part::Id, value)
}

/// Start a selector with a class, e.g. `class("primary")` for `.primary`.
pub fn class(value: &str) -> Selector {
    start(Part::Class, value)
}

/// Start a selector with an attribute expression, e.g. `attr("disabled")`
/// for `[disabled]`.
pub fn attr(value: &str) -> Selector {
    start(Part::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")` for
/// `:hover`.
pub fn pseudo_class(value: &str) -> Selector {
    start(Part::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("before")`
/// for `::before`.
pub fn pseudo_element(value: &str) -> Selector {
    start(Part::PseudoElement, value)
}

// A first fragment on an empty builder can violate neither rule, so the
// facade is infallible.
fn start(part: Part, value: &str) -> Selector {
    let mut selector = Selector::new();
    selector.store(part, value);
    selector
}

/// Join two selectors with a combinator token.
///
/// The token is passed through verbatim; ` `, `>`, `+`, and `~` are the
/// CSS-standard ones but nothing is enforced. Both operands are rendered
/// here and the result owns only the rendered strings, so mutating `left`
/// or `right` afterwards does not change the combined selector. The
/// returned builder is an ordinary [`Selector`] whose element slot holds
/// the rendered left operand; further fragment calls on it remain legal.
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    let mut selector = start(Part::Element, &left.stringify());
    let trailer = format!(" {combinator} {}", right.stringify());
    log::trace!("combine: {selector}{trailer}");
    selector.trailer = Some(trailer);
    selector
}
