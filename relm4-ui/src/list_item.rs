use relm4::{
    Sender,
    gtk::{self, glib, prelude::*},
    typed_view::list::RelmListItem,
};
use service::view_models::FruitListModel;
use ui_components::ColorSwatch;

use crate::{
    fruit_list_view::FruitListMsg,
    utils::grid_utils::{cell_label, widths},
};

/// Row of the fruit list. Carries the view's input sender so the row buttons
/// can report which fruit they belong to.
pub struct FruitListItem {
    pub fruit: FruitListModel,
    pub sender: Sender<FruitListMsg>,
}

pub struct FruitListItemWidgets {
    id: gtk::Label,
    swatch: ColorSwatch,
    name: gtk::Label,
    color: gtk::Label,
    edit_button: gtk::Button,
    delete_button: gtk::Button,
    handlers: Vec<(gtk::Button, glib::SignalHandlerId)>,
}

impl RelmListItem for FruitListItem {
    type Root = gtk::Box;
    type Widgets = FruitListItemWidgets;

    fn setup(_item: &gtk::ListItem) -> (gtk::Box, FruitListItemWidgets) {
        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .margin_top(4)
            .margin_bottom(4)
            .build();

        let id = cell_label(widths::LIST_ID);
        id.add_css_class("dim-label");

        let name_cell = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(8)
            .width_request(widths::LIST_NAME)
            .build();
        let swatch = ColorSwatch::new();
        let name = gtk::Label::builder().xalign(0.0).build();
        name_cell.append(swatch.widget());
        name_cell.append(&name);

        let color = cell_label(widths::LIST_COLOR);
        color.add_css_class("dim-label");

        let actions = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(4)
            .width_request(widths::LIST_ACTIONS)
            .build();
        let edit_button = gtk::Button::builder()
            .icon_name("document-edit-symbolic")
            .tooltip_text("Edit")
            .css_classes(["flat"])
            .build();
        let delete_button = gtk::Button::builder()
            .icon_name("user-trash-symbolic")
            .tooltip_text("Delete")
            .css_classes(["flat", "destructive-action"])
            .build();
        actions.append(&edit_button);
        actions.append(&delete_button);

        root.append(&id);
        root.append(&name_cell);
        root.append(&color);
        root.append(&actions);

        let widgets = FruitListItemWidgets {
            id,
            swatch,
            name,
            color,
            edit_button,
            delete_button,
            handlers: Vec::new(),
        };
        (root, widgets)
    }

    fn bind(&mut self, widgets: &mut Self::Widgets, _root: &mut Self::Root) {
        widgets.id.set_label(&self.fruit.id.to_string());
        widgets.swatch.set_color(self.fruit.swatch);
        widgets.name.set_label(&self.fruit.display_name);
        widgets.color.set_label(&self.fruit.color);

        let id = self.fruit.id;
        let sender = self.sender.clone();
        let edit_handler = widgets
            .edit_button
            .connect_clicked(move |_| sender.emit(FruitListMsg::Edit(id)));
        let sender = self.sender.clone();
        let delete_handler = widgets
            .delete_button
            .connect_clicked(move |_| sender.emit(FruitListMsg::Delete(id)));
        widgets.handlers = vec![
            (widgets.edit_button.clone(), edit_handler),
            (widgets.delete_button.clone(), delete_handler),
        ];
    }

    fn unbind(&mut self, widgets: &mut Self::Widgets, _root: &mut Self::Root) {
        // rows are recycled, drop the handlers of the previous fruit
        for (button, handler) in widgets.handlers.drain(..) {
            button.disconnect(handler);
        }
    }
}
