//! Button Component

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::colors::CounterColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (green)
    #[default]
    Primary,
    /// Secondary button (amber)
    Secondary,
    /// Danger button (red)
    Danger,
    /// Ghost button (translucent, for dark backgrounds)
    Ghost,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    hint: Option<SharedString>,
    variant: ButtonVariant,
    width: Option<f32>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: None,
            variant: ButtonVariant::Primary,
            width: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Show a keyboard hint under the label
    pub fn hint(mut self, hint: impl Into<SharedString>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Fix the button width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                CounterColors::button_primary_bg(),
                CounterColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                CounterColors::button_secondary_bg(),
                CounterColors::button_secondary_hover(),
            ),
            ButtonVariant::Danger => (
                CounterColors::button_danger_bg(),
                CounterColors::button_danger_hover(),
            ),
            ButtonVariant::Ghost => (CounterColors::ghost_bg(), CounterColors::ghost_hover()),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .flex_col()
            .items_center()
            .px(px(16.0))
            .py(px(8.0))
            .bg(bg_color)
            .text_color(CounterColors::button_text())
            .text_size(px(Typography::TEXT_SM))
            .font_weight(FontWeight::MEDIUM)
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if let Some(width) = self.width {
            element = element.w(px(width));
        }

        if let Some(hint) = self.hint {
            element = element.child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .opacity(0.8)
                    .child(hint),
            );
        }

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
