use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Overlay `over` onto `self`: set fields of `over` win, unset fields
    /// fall through. `Border::None` counts as unset and cannot override.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            background: over.background.or(self.background),
            foreground: over.foreground.or(self.foreground),
            border: if over.border == Border::None {
                self.border
            } else {
                over.border
            },
            text_style: self.text_style.union(over.text_style),
        }
    }
}
