use std::sync::Arc;

use core_types::ViewKind;
use relm4::{
    Component, ComponentController, ComponentParts, ComponentSender, Controller,
    gtk::{self, glib::clone, prelude::*},
};
use service::{app_services::AppServices, error::Error};
use strum::IntoEnumIterator;

use crate::{
    extended_data_view::{
        ExtendedDataInit, ExtendedDataMsg, ExtendedDataOutputMsg, ExtendedDataView,
    },
    fruit_list_view::{FruitListInit, FruitListOutputMsg, FruitListView},
    notification_bar::{NotificationBarModel, NotificationBarMsg, NotificationKind},
    style,
    utils::dialog_utils::show_error_dialog,
};

#[derive(Debug)]
pub struct AppInit {
    pub app_services: Arc<AppServices>,
    /// Set when the configuration was rejected and defaults are in use.
    pub startup_error: Option<Error>,
}

#[derive(Debug)]
pub enum AppMsg {
    TabActivated(ViewKind),
    Notify { kind: NotificationKind, text: String },
    ShowError(String),
}

pub struct AppModel {
    // Loads on its own at start-up; only kept alive here.
    _fruit_list: Controller<FruitListView>,
    extended_data: Controller<ExtendedDataView>,
    notification_bar: Controller<NotificationBarModel>,
}

pub struct AppWidgets {}

impl Component for AppModel {
    type Input = AppMsg;
    type Output = ();
    type CommandOutput = ();
    type Init = AppInit;
    type Root = gtk::Window;
    type Widgets = AppWidgets;

    fn init_root() -> Self::Root {
        gtk::Window::builder()
            .title("Fruits Dashboard")
            .default_width(1280)
            .default_height(800)
            .build()
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        style::load_app_css();

        let header_bar = gtk::HeaderBar::new();
        root.set_titlebar(Some(&header_bar));

        let main_container = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .build();

        let fruit_list = FruitListView::builder()
            .launch(FruitListInit {
                app_services: Arc::clone(&init.app_services),
            })
            .forward(sender.input_sender(), |msg| match msg {
                FruitListOutputMsg::Notify { kind, text } => AppMsg::Notify { kind, text },
            });

        let extended_data = ExtendedDataView::builder()
            .launch(ExtendedDataInit {
                app_services: Arc::clone(&init.app_services),
            })
            .forward(sender.input_sender(), |msg| match msg {
                ExtendedDataOutputMsg::Notify { kind, text } => AppMsg::Notify { kind, text },
            });

        let notebook = gtk::Notebook::builder().vexpand(true).build();
        for view_kind in ViewKind::iter() {
            let page: &gtk::Box = match view_kind {
                ViewKind::List => fruit_list.widget(),
                ViewKind::Extended => extended_data.widget(),
            };
            notebook.append_page(page, Some(&tab_label(view_kind)));
        }

        notebook.connect_switch_page(clone!(
            #[strong]
            sender,
            move |_, _, page_num| {
                if let Some(view_kind) = ViewKind::iter().nth(page_num as usize) {
                    sender.input(AppMsg::TabActivated(view_kind));
                }
            }
        ));

        let notification_bar = NotificationBarModel::builder().launch(()).detach();

        main_container.append(&notebook);
        main_container.append(notification_bar.widget());
        root.set_child(Some(&main_container));

        if let Some(error) = init.startup_error {
            sender.input(AppMsg::ShowError(format!(
                "Invalid configuration, using defaults: {}",
                error
            )));
        }

        let model = AppModel {
            _fruit_list: fruit_list,
            extended_data,
            notification_bar,
        };

        ComponentParts {
            model,
            widgets: AppWidgets {},
        }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>, root: &Self::Root) {
        match msg {
            AppMsg::TabActivated(ViewKind::Extended) => {
                tracing::debug!("Extended data tab activated");
                self.extended_data.emit(ExtendedDataMsg::Fetch);
            }
            AppMsg::TabActivated(ViewKind::List) => {}
            AppMsg::Notify { kind, text } => {
                self.notification_bar
                    .emit(NotificationBarMsg::Show { kind, text });
            }
            AppMsg::ShowError(message) => show_error_dialog(message, root),
        }
    }
}

fn tab_label(view_kind: ViewKind) -> gtk::Box {
    let label_box = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .build();
    label_box.append(&gtk::Image::from_icon_name(view_kind.icon_name()));
    label_box.append(&gtk::Label::new(Some(&view_kind.to_string())));
    label_box
}
