//! Workspace - Main Shell
//!
//! Sidebar with the admin pages and the table of the active page.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use tracing::info;

use crate::app::navigation::ActivePage;
use crate::components::composite::data_table::{DataTable, data_table};
use crate::config::Settings;
use crate::domain::{
    Customer, Distributor, Medicine, Order, Purchase, customer, distributor, medicine, order,
    purchase,
};
use crate::table::{RecordSet, TableBrowser};
use crate::theme::colors::DeskColors;

/// Main workspace containing the application layout
pub struct Workspace {
    active: ActivePage,
    inventory: Entity<DataTable<Medicine>>,
    orders: Entity<DataTable<Order>>,
    customers: Entity<DataTable<Customer>>,
    purchases: Entity<DataTable<Purchase>>,
    distributors: Entity<DataTable<Distributor>>,
}

impl Workspace {
    pub fn new(settings: &Settings, cx: &mut Context<Self>) -> Self {
        let options = settings.table_options();

        let inventory = TableBrowser::new(
            RecordSet::new(medicine::mock_medicines()),
            medicine::columns(),
            options.clone(),
        )
        .on_row_click(|m: &Medicine| info!(id = m.id, name = %m.name, "Medicine selected"));

        let orders = TableBrowser::new(RecordSet::new(order::mock_orders()), order::columns(), options.clone())
            .on_row_click(|o: &Order| info!(order = %o.order_number, "Order selected"));

        let customers = TableBrowser::new(RecordSet::new(customer::mock_customers()), customer::columns(), options.clone())
            .on_row_click(|c: &Customer| info!(id = c.id, name = %c.name, "Customer selected"));

        let purchases = TableBrowser::new(RecordSet::new(purchase::mock_purchases()), purchase::columns(), options.clone())
            .on_row_click(|p: &Purchase| info!(invoice = %p.invoice, "Purchase selected"));

        let distributors = TableBrowser::new(
            RecordSet::new(distributor::mock_distributors()),
            distributor::columns(),
            options,
        )
        .on_row_click(|d: &Distributor| info!(id = d.id, name = %d.name, "Distributor selected"));

        Self {
            active: ActivePage::default(),
            inventory: data_table(inventory, cx),
            orders: data_table(orders, cx),
            customers: data_table(customers, cx),
            purchases: data_table(purchases, cx),
            distributors: data_table(distributors, cx),
        }
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w(px(200.0))
            .h_full()
            .flex()
            .flex_col()
            .gap_1()
            .p_3()
            .bg(DeskColors::content_bg())
            .border_r_1()
            .border_color(DeskColors::border())
            .child(
                div()
                    .pb_4()
                    .text_lg()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(DeskColors::accent())
                    .child("Pharma Desk"),
            )
            .children(ActivePage::all().iter().map(|&page| {
                let selected = page == self.active;
                div()
                    .id(SharedString::from(page.title()))
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .cursor_pointer()
                    .text_sm()
                    .when(selected, |s| s.bg(DeskColors::accent()).text_color(DeskColors::text_on_accent()))
                    .when(!selected, |s| {
                        s.text_color(DeskColors::text_secondary())
                            .hover(|s| s.bg(DeskColors::table_row_hover()))
                    })
                    .child(page.title())
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        if this.active != page {
                            info!(page = page.title(), "Page changed");
                            this.active = page;
                            cx.notify();
                        }
                    }))
            }))
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.active {
            ActivePage::Inventory => self.inventory.clone().into_any_element(),
            ActivePage::Orders => self.orders.clone().into_any_element(),
            ActivePage::Customers => self.customers.clone().into_any_element(),
            ActivePage::Purchases => self.purchases.clone().into_any_element(),
            ActivePage::Distributors => self.distributors.clone().into_any_element(),
        };

        div()
            .size_full()
            .flex()
            .bg(DeskColors::background())
            .child(self.render_sidebar(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .p_6()
                    .gap_4()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child(self.active.title()),
                    )
                    .child(content),
            )
    }
}
