//! Shell Component
//!
//! The page shell: a header with the language switch, a static title and
//! welcome line, and exactly one mounted counter. The shell holds no counter
//! state and never reads the count.

use gpui::{
    AppContext, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement, Render,
    Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::constants::HEADER_HEIGHT;
use crate::features::counter::CounterView;
use crate::i18n::t;
use crate::theme::colors::CounterColors;
use crate::theme::typography::Typography;

/// Application shell
pub struct Shell {
    entities: AppEntities,
    counter: Entity<CounterView>,
}

impl Shell {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let counter = cx.new(|cx| CounterView::new(entities.clone(), cx));

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, counter }
    }

    /// The mounted counter view
    pub fn counter(&self) -> &Entity<CounterView> {
        &self.counter
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .justify_end()
            .px_4()
            .child(
                Button::ghost("lang-switcher", locale.toggled().display_name()).on_click(
                    move |_event: &ClickEvent, _window, cx| {
                        entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                        });
                    },
                ),
            )
    }
}

impl Render for Shell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(CounterColors::background())
            .text_color(CounterColors::text_light())
            .child(self.render_header(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_3XL))
                            .font_weight(FontWeight::BOLD)
                            .child(t(locale, "app-title")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(CounterColors::accent())
                            .child(t(locale, "app-welcome")),
                    )
                    .child(self.counter.clone()),
            )
    }
}
