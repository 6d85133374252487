use relm4::gtk::{self, prelude::*};
use service::grid::{GridColumn, SortDirection};

/// Pixel widths shared by header buttons and row cells so the columns line up.
pub mod widths {
    pub const LIST_ID: i32 = 50;
    pub const LIST_NAME: i32 = 260;
    pub const LIST_COLOR: i32 = 140;
    pub const LIST_ACTIONS: i32 = 100;

    pub const EXT_ID: i32 = 50;
    pub const EXT_NAME: i32 = 150;
    pub const EXT_ORIGIN: i32 = 140;
    pub const EXT_TASTE: i32 = 130;
    pub const EXT_NUTRITION: i32 = 170;
    pub const EXT_SUPPLIER: i32 = 230;
    pub const EXT_STATUS: i32 = 130;
    pub const EXT_PRICE: i32 = 90;
    pub const EXT_DATE: i32 = 190;
}

pub fn header_label<C: GridColumn>(column: C, sort: Option<(C, SortDirection)>) -> String {
    match sort {
        Some((sorted, SortDirection::Ascending)) if sorted == column => {
            format!("{} ▲", column.title())
        }
        Some((sorted, SortDirection::Descending)) if sorted == column => {
            format!("{} ▼", column.title())
        }
        _ => column.title().to_string(),
    }
}

/// Row of flat buttons acting as clickable column headers.
#[derive(Debug)]
pub struct SortHeader<C: GridColumn> {
    buttons: Vec<(C, gtk::Button)>,
}

impl<C: GridColumn> SortHeader<C> {
    pub fn build<F>(container: &gtk::Box, columns: &[(C, i32)], on_click: F) -> Self
    where
        F: Fn(C) + Clone + 'static,
    {
        let buttons = columns
            .iter()
            .map(|(column, width)| {
                let column = *column;
                let button = gtk::Button::builder()
                    .label(column.title())
                    .width_request(*width)
                    .sensitive(column.sortable())
                    .css_classes(["flat", "grid-header"])
                    .build();
                let on_click = on_click.clone();
                button.connect_clicked(move |_| on_click(column));
                container.append(&button);
                (column, button)
            })
            .collect();
        Self { buttons }
    }

    pub fn update(&self, sort: Option<(C, SortDirection)>) {
        for (column, button) in &self.buttons {
            button.set_label(&header_label(*column, sort));
        }
    }
}

/// Non-clickable header cell, e.g. for the actions column.
pub fn append_static_header(container: &gtk::Box, title: &str, width: i32) {
    let label = gtk::Label::builder()
        .label(title)
        .width_request(width)
        .css_classes(["grid-header"])
        .build();
    container.append(&label);
}

pub fn cell_label(width: i32) -> gtk::Label {
    gtk::Label::builder()
        .xalign(0.0)
        .width_request(width)
        .ellipsize(gtk::pango::EllipsizeMode::End)
        .build()
}
