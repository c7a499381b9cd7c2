use crate::element::{self, Element};
use crate::event::Event;
use crate::layout::LayoutResult;
use crate::measure;
use crate::query::{self, Selector, SelectorError};

/// Options recognized at attach time. Selectors that match nothing make
/// the corresponding operations no-ops.
#[derive(Debug, Clone)]
pub struct CollapsibleOptions {
    /// Selector for the show/hide control. May match anywhere in the tree.
    pub navigation_selector: String,
    /// Selector for the to-be-collapsed region among the parent's
    /// immediate children.
    pub content_selector: String,
    /// Class set on the content region when it is collapsed.
    pub collapsed_class: String,
    /// Class set on the content region when it is expanded.
    pub expanded_class: String,
    /// Class toggled on the control and content region by clicks on the
    /// control.
    pub visible_class: String,
    /// Minimum viewport width, in em units, below which auto-collapse is
    /// disabled.
    pub min_width_em: u16,
}

impl Default for CollapsibleOptions {
    fn default() -> Self {
        Self {
            navigation_selector: ".collapsible-toggle".to_string(),
            content_selector: ".collapsible-content".to_string(),
            collapsed_class: "collapsed".to_string(),
            expanded_class: "expanded".to_string(),
            visible_class: "visible".to_string(),
            min_width_em: 30,
        }
    }
}

/// Viewport measurements for an evaluation. `em` is the root font size in
/// the same unit as `width`; terminal hosts pass one cell per em.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u16,
    pub em: u16,
}

impl Viewport {
    pub fn new(width: u16) -> Self {
        Self { width, em: 1 }
    }

    pub fn em(mut self, em: u16) -> Self {
        self.em = em;
        self
    }
}

/// A collapsible navigation container.
///
/// Attached to a parent element, it collapses the content region among the
/// parent's immediate children whenever the region's children no longer
/// fit the parent's width, and shows the navigation control as the way
/// back in. Collapsing and expanding means applying the configured classes
/// to the content region; what those classes look like is the host
/// stylesheet's business. On narrow screens (viewport at or below
/// `min_width_em` ems) auto-collapse is disabled entirely and the control
/// is always shown.
///
/// Display state lives in the tree as class membership, not in the widget,
/// so the widths are re-measured on every evaluation. The widget is driven
/// from the host event loop via
/// [`process_events`](Collapsible::process_events).
#[derive(Debug)]
pub struct Collapsible {
    parent: Selector,
    navigation: Selector,
    content: Selector,
    options: CollapsibleOptions,
}

impl Collapsible {
    /// Bind the widget to the first element matching `parent` and run one
    /// immediate evaluation. Fails only on malformed selector syntax.
    pub fn attach(
        root: &mut Element,
        parent: &str,
        options: CollapsibleOptions,
        layout: &LayoutResult,
        viewport: Viewport,
    ) -> Result<Self, SelectorError> {
        let widget = Self {
            parent: Selector::parse(parent)?,
            navigation: Selector::parse(&options.navigation_selector)?,
            content: Selector::parse(&options.content_selector)?,
            options,
        };
        widget.evaluate(root, layout, viewport);
        Ok(widget)
    }

    /// Process one batch of events: clicks on the navigation control
    /// toggle the visible class, resizes re-run the evaluation with the
    /// new width.
    pub fn process_events(
        &self,
        events: &[Event],
        root: &mut Element,
        layout: &LayoutResult,
        viewport: Viewport,
    ) {
        for event in events {
            match event {
                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    if let Some(control) = query::matching_ancestor(root, target, &self.navigation)
                    {
                        self.toggle_visible(root, &control);
                    }
                }
                Event::Resize { width, .. } => {
                    self.evaluate(
                        root,
                        layout,
                        Viewport {
                            width: *width,
                            em: viewport.em,
                        },
                    );
                }
                _ => {}
            }
        }
    }

    /// Re-run the collapse decision against the current measurements.
    pub fn evaluate(&self, root: &mut Element, layout: &LayoutResult, viewport: Viewport) {
        let min_width = u32::from(self.options.min_width_em) * u32::from(viewport.em);
        log::debug!(
            "[collapsible] viewport width {} / minimal width {}",
            viewport.width,
            min_width
        );

        // Narrow screens never auto-collapse; the control stays available
        // and the content region's state classes are left alone.
        if u32::from(viewport.width) <= min_width {
            log::debug!("[collapsible] narrow screen, showing control");
            self.set_navigation_hidden(root, false);
            return;
        }

        let Some(parent_id) = query::select_all(root, &self.parent).into_iter().next() else {
            return;
        };
        let Some(parent) = element::find(root, &parent_id) else {
            return;
        };

        // Rendered outer width when the parent was laid out, intrinsic
        // estimate otherwise (e.g. evaluation before the first render).
        let parent_width = match layout.get(&parent_id) {
            Some(rect) => u32::from(rect.width) + u32::from(parent.margin.horizontal_total()),
            None => u32::from(measure::outer_width(parent)),
        };

        let content_ids = query::select_children(parent, &self.content);
        let content_width: u32 = parent
            .child_elements()
            .iter()
            .filter(|c| self.content.matches(c))
            .map(|c| u32::from(measure::children_outer_width(c)))
            .sum();

        if parent_width < content_width {
            log::debug!("[collapsible] collapse ({parent_width} < {content_width})");
            for id in &content_ids {
                self.set_collapsed(root, id, true);
            }
            self.set_navigation_hidden(root, false);
        } else {
            log::debug!("[collapsible] expand ({parent_width} >= {content_width})");
            for id in &content_ids {
                self.set_collapsed(root, id, false);
            }
            self.set_navigation_hidden(root, true);
        }
    }

    fn set_collapsed(&self, root: &mut Element, id: &str, collapsed: bool) {
        if let Some(el) = element::find_mut(root, id) {
            el.set_class(&self.options.collapsed_class, collapsed);
            el.set_class(&self.options.expanded_class, !collapsed);
        }
    }

    fn set_navigation_hidden(&self, root: &mut Element, hidden: bool) {
        query::for_each_match(root, &self.navigation, &mut |el| el.hidden = hidden);
    }

    /// Toggle the visible class on the clicked control and on the content
    /// region, independent of the collapse state.
    fn toggle_visible(&self, root: &mut Element, control_id: &str) {
        log::debug!("[collapsible] toggling visibility via {control_id}");
        if let Some(el) = element::find_mut(root, control_id) {
            el.toggle_class(&self.options.visible_class);
        }
        for id in self.content_ids(root) {
            if let Some(el) = element::find_mut(root, &id) {
                el.toggle_class(&self.options.visible_class);
            }
        }
    }

    fn content_ids(&self, root: &Element) -> Vec<String> {
        query::select_all(root, &self.parent)
            .into_iter()
            .next()
            .and_then(|parent_id| element::find(root, &parent_id))
            .map(|parent| query::select_children(parent, &self.content))
            .unwrap_or_default()
    }
}
