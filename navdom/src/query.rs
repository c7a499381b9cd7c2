use thiserror::Error;

use crate::element::Element;

/// A parsed selector: `#id` or `.class`.
///
/// Selectors that match nothing are not errors; queries return empty
/// result sets and callers degrade to no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector `{0}`, expected `#id` or `.class`")]
    Unsupported(String),
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        match (input.strip_prefix('#'), input.strip_prefix('.')) {
            (Some(name), _) if !name.is_empty() => Ok(Self::Id(name.to_string())),
            (_, Some(name)) if !name.is_empty() => Ok(Self::Class(name.to_string())),
            _ => Err(SelectorError::Unsupported(input.to_string())),
        }
    }

    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
        }
    }
}

/// Ids of all elements in the tree matching the selector, in tree order.
pub fn select_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    collect_matching(root, selector, &mut result);
    result
}

fn collect_matching(element: &Element, selector: &Selector, result: &mut Vec<String>) {
    if selector.matches(element) {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_matching(child, selector, result);
    }
}

/// Ids of the parent's immediate children matching the selector.
pub fn select_children(parent: &Element, selector: &Selector) -> Vec<String> {
    parent
        .child_elements()
        .iter()
        .filter(|c| selector.matches(c))
        .map(|c| c.id.clone())
        .collect()
}

/// The nearest self-or-ancestor of `id` matching the selector.
pub fn matching_ancestor(root: &Element, id: &str, selector: &Selector) -> Option<String> {
    let mut path = Vec::new();
    if !path_to(root, id, &mut path) {
        return None;
    }
    path.iter()
        .rev()
        .find(|el| selector.matches(el))
        .map(|el| el.id.clone())
}

fn path_to<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if path_to(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Apply `f` to every element in the tree matching the selector.
pub fn for_each_match<F: FnMut(&mut Element)>(root: &mut Element, selector: &Selector, f: &mut F) {
    if selector.matches(root) {
        f(root);
    }
    for child in root.child_elements_mut() {
        for_each_match(child, selector, f);
    }
}
