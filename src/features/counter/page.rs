//! Counter Page
//!
//! Owns the count for as long as the view is mounted. Every transition runs
//! on the UI thread, mutates the owned `Counter`, then calls `cx.notify()` so
//! the next frame renders the new value. Dropping the view drops the count;
//! a fresh view always starts from zero.

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Window, div, px,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::constants::{COUNTER_BUTTON_WIDTH, COUNTER_KEY_CONTEXT};
use crate::domain::counter::{Counter, CounterAction};
use crate::helpers::{Decrement, Increment, Reset, counter_shortcut, humanize_keystroke};
use crate::i18n::t;
use crate::theme::colors::CounterColors;
use crate::theme::typography::Typography;

/// Counter widget view
pub struct CounterView {
    entities: AppEntities,
    counter: Counter,
    focus_handle: FocusHandle,
}

impl CounterView {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Labels follow the locale
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            counter: Counter::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Apply a transition and schedule a re-render
    pub fn apply(&mut self, action: CounterAction, cx: &mut Context<Self>) {
        let count = self.counter.apply(action);
        debug!(action = %action, count, "Counter transition");
        cx.notify();
    }

    fn on_increment(&mut self, _: &Increment, _window: &mut Window, cx: &mut Context<Self>) {
        self.apply(CounterAction::Increment, cx);
    }

    fn on_decrement(&mut self, _: &Decrement, _window: &mut Window, cx: &mut Context<Self>) {
        self.apply(CounterAction::Decrement, cx);
    }

    fn on_reset(&mut self, _: &Reset, _window: &mut Window, cx: &mut Context<Self>) {
        self.apply(CounterAction::Reset, cx);
    }

    fn render_button(&self, action: CounterAction, cx: &mut Context<Self>) -> Button {
        let locale = self.entities.i18n.read(cx).locale;
        let variant = match action {
            CounterAction::Increment => ButtonVariant::Primary,
            CounterAction::Decrement => ButtonVariant::Secondary,
            CounterAction::Reset => ButtonVariant::Danger,
        };

        Button::new(action.name(), t(locale, action.label_key()))
            .variant(variant)
            .width(COUNTER_BUTTON_WIDTH)
            .hint(humanize_keystroke(counter_shortcut(action)))
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.apply(action, cx);
            }))
    }
}

impl Focusable for CounterView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CounterView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let buttons: Vec<Button> = CounterAction::all()
            .iter()
            .map(|action| self.render_button(*action, cx))
            .collect();

        div()
            .key_context(COUNTER_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_increment))
            .on_action(cx.listener(Self::on_decrement))
            .on_action(cx.listener(Self::on_reset))
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .p_6()
            .rounded_lg()
            .border_1()
            .border_color(CounterColors::border())
            .bg(CounterColors::card_bg())
            .text_color(CounterColors::text_primary())
            // Heading
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(t(locale, "counter-title")),
            )
            // Display
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(CounterColors::text_secondary())
                            .child(t(locale, "counter-current")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_COUNT))
                            .font_weight(FontWeight::BOLD)
                            .child(self.counter.display_value()),
                    ),
            )
            // Controls
            .child(div().flex().flex_row().gap_3().children(buttons))
    }
}
