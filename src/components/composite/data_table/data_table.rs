//! DataTable Component
//!
//! GPUI front end for a `TableBrowser`. Every interaction is forwarded to the
//! browser and the resulting `TableView` is drawn as-is.

use gpui::{
    ClickEvent, Context, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::*, px,
};
use tracing::debug;

use super::pagination::Pagination;
use crate::components::primitives::{Button, ButtonVariant};
use crate::constants::{DEFAULT_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::table::view::{HeaderCell, PageSizeSelector, RowView, SearchBox};
use crate::table::{ColumnWidth, Record, SortDirection, TableBody, TableBrowser};
use crate::theme::colors::DeskColors;

/// DataTable component
pub struct DataTable<R: Record + 'static> {
    browser: TableBrowser<R>,
    focus_handle: FocusHandle,
}

impl<R: Record + 'static> DataTable<R> {
    pub fn new(browser: TableBrowser<R>, cx: &mut Context<Self>) -> Self {
        Self {
            browser,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn browser(&self) -> &TableBrowser<R> {
        &self.browser
    }

    /// Mutate the browser and redraw
    pub fn update_browser(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut TableBrowser<R>)) {
        f(&mut self.browser);
        cx.notify();
    }

    fn column_widths(&self) -> Vec<f32> {
        self.browser
            .columns()
            .iter()
            .map(|col| match col.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Flex { min, .. } => min.unwrap_or(DEFAULT_COLUMN_WIDTH),
            })
            .collect()
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let mut query = self.browser.state().search_query().to_string();
        match event.keystroke.key.as_str() {
            "backspace" => {
                query.pop();
            }
            "escape" => query.clear(),
            _ => match &event.keystroke.key_char {
                Some(text) if !event.keystroke.modifiers.control => query.push_str(text),
                _ => return,
            },
        }
        self.browser.set_search(&query);
        cx.notify();
    }

    fn render_search(&self, search: SearchBox, window: &Window) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let (text, color) = if search.query.is_empty() {
            (SharedString::from(search.placeholder), DeskColors::input_placeholder())
        } else {
            (SharedString::from(search.query), DeskColors::text_primary())
        };

        div()
            .id("table-search")
            .track_focus(&self.focus_handle)
            .px_3()
            .py_2()
            .min_w(px(240.0))
            .bg(DeskColors::input_bg())
            .border_1()
            .border_color(if focused {
                DeskColors::border_focus()
            } else {
                DeskColors::input_border()
            })
            .rounded_md()
            .text_sm()
            .text_color(color)
            .child(text)
    }

    fn render_page_size(&self, selector: PageSizeSelector, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_secondary())
                    .child("Rows per page"),
            )
            .children(selector.options.into_iter().map(|size| {
                let variant = if size == selector.current {
                    ButtonVariant::Primary
                } else {
                    ButtonVariant::Ghost
                };
                Button::new(SharedString::from(format!("page-size-{size}")), size.to_string())
                    .variant(variant)
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.browser.set_page_size(size);
                        cx.notify();
                    }))
            }))
    }

    fn render_header(&self, headers: Vec<HeaderCell>, widths: &[f32], cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(DeskColors::table_header_bg())
            .border_b_1()
            .border_color(DeskColors::border())
            .children(headers.into_iter().zip(widths).map(|(header, width)| {
                let label = match header.sort_indicator {
                    Some(SortDirection::Ascending) => format!("{} ↑", header.label),
                    Some(SortDirection::Descending) => format!("{} ↓", header.label),
                    None => header.label,
                };
                let mut cell = div()
                    .id(SharedString::from(format!("header-{}", header.key)))
                    .w(px(*width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(DeskColors::text_secondary())
                    .child(label);
                if header.sortable {
                    let key = header.key;
                    cell = cell
                        .cursor_pointer()
                        .hover(|s| s.text_color(DeskColors::text_primary()))
                        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                            this.browser.toggle_sort(&key);
                            cx.notify();
                        }));
                }
                cell
            }))
    }

    fn render_row(&self, row: RowView, index: usize, widths: &[f32], cx: &mut Context<Self>) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            DeskColors::content_bg()
        } else {
            DeskColors::table_row_alt()
        };
        let key = row.key;
        let clickable = self.browser.has_row_click_handler();

        div()
            .id(SharedString::from(format!("row-{key}")))
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .when(clickable, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(DeskColors::table_row_hover()))
            })
            .border_b_1()
            .border_color(DeskColors::border())
            .children(row.cells.into_iter().zip(widths).map(|(text, width)| {
                div()
                    .w(px(*width))
                    .px_3()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .overflow_hidden()
                    .child(text)
            }))
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, _cx| {
                if !this.browser.click_row(&key) {
                    debug!(key = %key, "Clicked row is no longer present");
                }
            }))
    }

    fn render_placeholder(&self, text: impl Into<SharedString>) -> impl IntoElement {
        div()
            .h(px(TABLE_ROW_HEIGHT * 3.0))
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(DeskColors::text_muted())
            .child(text.into())
    }
}

impl<R: Record + 'static> Focusable for DataTable<R> {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<R: Record + 'static> Render for DataTable<R> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let widths = self.column_widths();
        let view = self.browser.view();

        let mut toolbar = div().w_full().flex().items_center().justify_between().pb_3();
        if let Some(search) = view.search {
            toolbar = toolbar.child(self.render_search(search, window));
        } else {
            toolbar = toolbar.child(div());
        }
        if let Some(selector) = view.page_size {
            toolbar = toolbar.child(self.render_page_size(selector, cx));
        }

        let mut table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(DeskColors::content_bg())
            .border_1()
            .border_color(DeskColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header(view.headers, &widths, cx));

        table = match view.body {
            TableBody::Loading => table.child(self.render_placeholder("Loading...")),
            TableBody::Empty { message, .. } => table.child(self.render_placeholder(message)),
            TableBody::Rows(rows) => table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(
                        rows.into_iter()
                            .enumerate()
                            .map(|(i, row)| self.render_row(row, i, &widths, cx)),
                    ),
            ),
        };

        if let Some(pagination) = view.pagination {
            let entity = cx.entity();
            table = table.child(Pagination::new(pagination).on_navigate(move |button, _window, cx| {
                entity.update(cx, |this, cx| {
                    this.browser.navigate(button);
                    cx.notify();
                });
            }));
        }

        div()
            .id("data-table")
            .key_context("DataTable")
            .on_key_down(cx.listener(Self::on_key_down))
            .on_click(cx.listener(|this, _: &ClickEvent, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .size_full()
            .flex()
            .flex_col()
            .child(toolbar)
            .child(table)
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Record + 'static, V: 'static>(browser: TableBrowser<R>, cx: &mut Context<V>) -> Entity<DataTable<R>> {
    cx.new(|cx| DataTable::new(browser, cx))
}
