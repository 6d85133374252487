use relm4::{
    gtk::{self, prelude::*},
    typed_view::list::RelmListItem,
};
use service::view_models::ExtendedFruitRowModel;
use ui_components::{ColorSwatch, CountryFlagLabel, StarRatingWidget};

use crate::utils::grid_utils::{cell_label, widths};

pub struct ExtendedFruitItem {
    pub row: ExtendedFruitRowModel,
}

pub struct ExtendedFruitItemWidgets {
    id: gtk::Label,
    swatch: ColorSwatch,
    name: gtk::Label,
    origin: CountryFlagLabel,
    taste: gtk::Label,
    nutrition: gtk::Label,
    supplier_cell: gtk::Box,
    supplier_name: gtk::Label,
    supplier_rating: StarRatingWidget,
    status: gtk::Label,
    price: gtk::Label,
    date_added: gtk::Label,
}

impl RelmListItem for ExtendedFruitItem {
    type Root = gtk::Box;
    type Widgets = ExtendedFruitItemWidgets;

    fn setup(_item: &gtk::ListItem) -> (gtk::Box, ExtendedFruitItemWidgets) {
        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .margin_top(4)
            .margin_bottom(4)
            .build();

        let id = cell_label(widths::EXT_ID);
        id.add_css_class("dim-label");

        let name_cell = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(8)
            .width_request(widths::EXT_NAME)
            .build();
        let swatch = ColorSwatch::new();
        let name = gtk::Label::builder().xalign(0.0).build();
        name_cell.append(swatch.widget());
        name_cell.append(&name);

        let origin = CountryFlagLabel::new();
        origin.widget().set_width_request(widths::EXT_ORIGIN);

        let taste = cell_label(widths::EXT_TASTE);
        let nutrition = cell_label(widths::EXT_NUTRITION);

        let supplier_cell = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .width_request(widths::EXT_SUPPLIER)
            .build();
        let supplier_name = gtk::Label::builder().xalign(0.0).build();
        let supplier_rating = StarRatingWidget::new();
        supplier_cell.append(&supplier_name);
        supplier_cell.append(supplier_rating.widget());

        let status_cell = gtk::Box::builder()
            .width_request(widths::EXT_STATUS)
            .build();
        let status = gtk::Label::new(None);
        status_cell.append(&status);

        let price = cell_label(widths::EXT_PRICE);
        let date_added = cell_label(widths::EXT_DATE);

        root.append(&id);
        root.append(&name_cell);
        root.append(origin.widget());
        root.append(&taste);
        root.append(&nutrition);
        root.append(&supplier_cell);
        root.append(&status_cell);
        root.append(&price);
        root.append(&date_added);

        let widgets = ExtendedFruitItemWidgets {
            id,
            swatch,
            name,
            origin,
            taste,
            nutrition,
            supplier_cell,
            supplier_name,
            supplier_rating,
            status,
            price,
            date_added,
        };
        (root, widgets)
    }

    fn bind(&mut self, widgets: &mut Self::Widgets, _root: &mut Self::Root) {
        let row = &self.row;

        widgets.id.set_label(&row.id.to_string());
        widgets.swatch.set_color(row.swatch);
        widgets.name.set_label(&row.name);
        widgets.origin.set_flag(&row.origin);
        widgets.taste.set_label(&row.taste);

        widgets.nutrition.set_label(row.nutrition_cell());
        widgets
            .nutrition
            .set_tooltip_text(row.nutrition.as_ref().map(|n| n.tooltip.as_str()));

        widgets.supplier_name.set_label(&row.supplier.name);
        widgets.supplier_rating.set_rating(&row.supplier.rating);
        widgets
            .supplier_cell
            .set_tooltip_text(Some(&row.supplier.tooltip));

        widgets.status.set_label(&row.status);
        widgets
            .status
            .set_css_classes(&["status-badge", row.status_kind.css_class()]);
        widgets.status.set_visible(!row.status.is_empty());

        widgets.price.set_label(&row.price_label);
        widgets.date_added.set_label(&row.date_added);
    }
}
