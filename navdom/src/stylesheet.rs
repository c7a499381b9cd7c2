use crate::element::Element;
use crate::query::Selector;
use crate::types::Style;

/// A style patch applied to matching elements. `display` controls whether
/// the element is laid out and rendered at all.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub style: Style,
    pub display: Option<bool>,
}

impl Rule {
    pub fn style(style: Style) -> Self {
        Self {
            style,
            display: None,
        }
    }

    /// Matching elements take no layout space, like `display: none`.
    pub fn hide() -> Self {
        Self {
            style: Style::default(),
            display: Some(false),
        }
    }

    /// Re-show elements hidden by an earlier rule.
    pub fn show() -> Self {
        Self {
            style: Style::default(),
            display: Some(true),
        }
    }

    pub fn and_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Ordered class/id rules, the stand-in for an external stylesheet.
///
/// Precedence, weakest to strongest: earlier rules, later rules, the
/// element's inline style. The element's `hidden` flag outranks every
/// rule, like an inline display override.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<(Selector, Rule)>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: Selector, rule: Rule) -> Self {
        self.rules.push((selector, rule));
        self
    }

    /// Whether the element should be laid out and rendered.
    pub fn visible(&self, element: &Element) -> bool {
        if element.hidden {
            return false;
        }
        self.rules
            .iter()
            .filter(|(selector, _)| selector.matches(element))
            .fold(true, |display, (_, rule)| rule.display.unwrap_or(display))
    }

    /// The element's computed style: matching rules cascaded in order,
    /// inline style on top.
    pub fn computed(&self, element: &Element) -> Style {
        let cascade = self
            .rules
            .iter()
            .filter(|(selector, _)| selector.matches(element))
            .fold(Style::default(), |acc, (_, rule)| acc.merge(&rule.style));
        cascade.merge(&element.style)
    }
}
