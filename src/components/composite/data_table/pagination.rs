//! Pagination Component
//!
//! Range text and first/previous/next/last buttons under the DataTable.

use std::rc::Rc;

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::components::primitives::Button;
use crate::table::NavButton;
use crate::table::view::PaginationView;
use crate::theme::colors::DeskColors;

type NavigateHandler = Rc<dyn Fn(NavButton, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    view: PaginationView,
    on_navigate: Option<NavigateHandler>,
}

impl Pagination {
    pub fn new(view: PaginationView) -> Self {
        Self {
            view,
            on_navigate: None,
        }
    }

    /// Called with the pressed button
    pub fn on_navigate(mut self, handler: impl Fn(NavButton, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let view = self.view;
        let mut leading: Vec<Button> = NavButton::ALL
            .into_iter()
            .map(|button| {
                let mut element = Button::secondary(
                    gpui::SharedString::from(format!("page-{button:?}")),
                    button.glyph(),
                )
                .disabled(!view.is_enabled(button));
                if let Some(handler) = self.on_navigate.clone() {
                    element = element.on_click(move |_, window, cx| handler(button, window, cx));
                }
                element
            })
            .collect();
        let trailing = leading.split_off(2);

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(DeskColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_secondary())
                    .child(view.range_text()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(leading)
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_primary())
                            .child(view.page_text()),
                    )
                    .children(trailing),
            )
    }
}
