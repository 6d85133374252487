use std::{path::PathBuf, sync::Arc};

use core_types::ViewKind;
use relm4::{
    Component, ComponentController, ComponentParts, ComponentSender, Controller, RelmWidgetExt,
    gtk::{self, glib::clone, prelude::*},
    typed_view::list::TypedListView,
};
use service::{
    app_services::AppServices,
    error::Error,
    export_service::{LIST_EXPORT_FILE_NAME, write_export},
    fetch_state::{FetchOutcome, FetchTicket, ViewDisplay, ViewSlot},
    view_models::{FruitListColumn, FruitListSnapshot},
};
use ui_components::{DropDownInit, DropDownOutputMsg, PageSizeDropDown, PageSizeSelectedMsg};

use crate::{
    grid_view::{GridMsg, GridView, export_notification, fetch_notification},
    list_item::FruitListItem,
    notification_bar::NotificationKind,
    utils::{
        grid_utils::{SortHeader, append_static_header, widths},
        typed_list_view_utils::replace_items,
        view_utils::{EMPTY_STATE_TEXT, choose_export_folder},
    },
};

#[derive(Debug)]
pub enum FruitListMsg {
    Fetch,
    Grid(GridMsg<FruitListColumn>),
    Export,
    ExportFolderSelected(PathBuf),
    Edit(i64),
    Delete(i64),
}

#[derive(Debug)]
pub enum FruitListCmdMsg {
    Fetched(FetchTicket, Result<FruitListSnapshot, Error>),
    ExportFinished(Result<PathBuf, Error>),
}

#[derive(Debug)]
pub enum FruitListOutputMsg {
    Notify { kind: NotificationKind, text: String },
}

#[derive(Debug)]
pub struct FruitListInit {
    pub app_services: Arc<AppServices>,
}

pub struct FruitListView {
    app_services: Arc<AppServices>,
    slot: ViewSlot<FruitListSnapshot>,
    grid: GridView<FruitListColumn>,
    list_view_wrapper: TypedListView<FruitListItem, gtk::NoSelection>,
    page_size_dropdown: Controller<PageSizeDropDown>,
}

#[relm4::component(pub)]
impl Component for FruitListView {
    type Init = FruitListInit;
    type Input = FruitListMsg;
    type Output = FruitListOutputMsg;
    type CommandOutput = FruitListCmdMsg;

    view! {
        #[root]
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 10,
            set_margin_all: 10,

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 6,

                gtk::Label {
                    set_hexpand: true,
                    set_xalign: 0.0,
                    add_css_class: "title-4",
                    #[watch]
                    set_label: &model.title(),
                },

                gtk::SearchEntry {
                    set_placeholder_text: Some("Search…"),
                    connect_search_changed[sender] => move |entry| {
                        sender.input(FruitListMsg::Grid(GridMsg::QuickFilterChanged(
                            entry.text().to_string(),
                        )));
                    },
                },

                gtk::Button {
                    set_icon_name: "document-save-symbolic",
                    set_tooltip_text: Some("Export CSV"),
                    #[watch]
                    set_sensitive: model.grid.page_info().total > 0,
                    connect_clicked => FruitListMsg::Export,
                },

                gtk::Button {
                    set_icon_name: "view-refresh-symbolic",
                    set_tooltip_text: Some("Refresh"),
                    #[watch]
                    set_sensitive: !model.slot.is_loading(),
                    connect_clicked => FruitListMsg::Fetch,
                },
            },

            #[name = "header_box"]
            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                add_css_class: "grid-header-row",
                #[watch]
                set_visible: model.slot.display() == ViewDisplay::Rows,
            },

            gtk::Spinner {
                set_vexpand: true,
                set_spinning: true,
                #[watch]
                set_visible: model.slot.display() == ViewDisplay::LoadingPlaceholder,
            },

            gtk::ScrolledWindow {
                set_vexpand: true,
                #[watch]
                set_visible: model.slot.display() == ViewDisplay::Rows,
                #[local_ref]
                list_view -> gtk::ListView {
                    add_css_class: "grid",
                },
            },

            gtk::Label {
                set_vexpand: true,
                set_label: EMPTY_STATE_TEXT,
                add_css_class: "dim-label",
                #[watch]
                set_visible: model.slot.display() == ViewDisplay::Empty,
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 6,
                set_halign: gtk::Align::End,

                gtk::Label {
                    set_label: "Rows per page:",
                },

                #[local_ref]
                page_size_widget -> gtk::Box {},

                gtk::Label {
                    #[watch]
                    set_label: &model.grid.page_info().range_label,
                },

                gtk::Button {
                    set_icon_name: "go-previous-symbolic",
                    #[watch]
                    set_sensitive: model.grid.page_info().has_previous,
                    connect_clicked => FruitListMsg::Grid(GridMsg::PreviousPage),
                },

                gtk::Button {
                    set_icon_name: "go-next-symbolic",
                    #[watch]
                    set_sensitive: model.grid.page_info().has_next,
                    connect_clicked => FruitListMsg::Grid(GridMsg::NextPage),
                },
            },
        }
    }

    fn init(
        init_model: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let view_kind = ViewKind::List;
        let page_size = view_kind.default_page_size();

        let page_size_dropdown = PageSizeDropDown::builder()
            .launch(DropDownInit {
                items: view_kind.page_sizes().to_vec(),
                selected: Some(page_size),
            })
            .forward(sender.input_sender(), |msg| match msg {
                DropDownOutputMsg::ItemSelected(PageSizeSelectedMsg::PageSizeSelected(size)) => {
                    FruitListMsg::Grid(GridMsg::PageSizeChanged(size))
                }
                _ => unreachable!(),
            });

        let mut model = FruitListView {
            app_services: init_model.app_services,
            slot: ViewSlot::new(),
            grid: GridView::new(page_size),
            list_view_wrapper: TypedListView::new(),
            page_size_dropdown,
        };

        let list_view = &model.list_view_wrapper.view;
        let page_size_widget = model.page_size_dropdown.widget();
        let widgets = view_output!();

        let sort_header = SortHeader::build(
            &widgets.header_box,
            &[
                (FruitListColumn::Id, widths::LIST_ID),
                (FruitListColumn::Name, widths::LIST_NAME),
                (FruitListColumn::Color, widths::LIST_COLOR),
            ],
            clone!(
                #[strong]
                sender,
                move |column| sender.input(FruitListMsg::Grid(GridMsg::SortBy(column)))
            ),
        );
        append_static_header(&widgets.header_box, "Actions", widths::LIST_ACTIONS);
        model.grid.set_sort_header(sort_header);

        // The list view loads as soon as the window opens.
        sender.input(FruitListMsg::Fetch);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, root: &Self::Root) {
        match msg {
            FruitListMsg::Fetch => {
                let ticket = self.slot.begin_fetch();
                tracing::debug!(?ticket, "Fetching fruit list");
                let dashboard = self.app_services.dashboard();
                sender.oneshot_command(async move {
                    let result = dashboard.load_fruit_list().await;
                    FruitListCmdMsg::Fetched(ticket, result)
                });
            }
            FruitListMsg::Grid(msg) => {
                self.grid.apply(msg);
                self.refresh_rows(&sender);
            }
            FruitListMsg::Export => {
                choose_export_folder(root, "Export fruits", move |path| {
                    sender.input(FruitListMsg::ExportFolderSelected(path));
                });
            }
            FruitListMsg::ExportFolderSelected(path) => self.export(&sender, path),
            FruitListMsg::Edit(id) => self.app_services.fruit_actions().edit(id),
            FruitListMsg::Delete(id) => self.app_services.fruit_actions().delete(id),
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            FruitListCmdMsg::Fetched(ticket, result) => {
                let outcome = self.slot.complete(ticket, result);
                match &outcome {
                    FetchOutcome::Loaded => {
                        tracing::info!(rows = self.row_count(), "Fruits loaded");
                        self.refresh_rows(&sender);
                    }
                    FetchOutcome::Failed(error) => {
                        tracing::error!(error = %error, "Failed to load fruits");
                    }
                    FetchOutcome::Stale => {}
                }
                let notification = fetch_notification(
                    &outcome,
                    "Fruits loaded successfully",
                    "Failed to load fruits",
                );
                if let Some((kind, text)) = notification {
                    notify(&sender, kind, text);
                }
            }
            FruitListCmdMsg::ExportFinished(result) => {
                if let Err(error) = &result {
                    tracing::error!(error = %error, "CSV export failed");
                }
                let (kind, text) = export_notification(&result);
                notify(&sender, kind, text);
            }
        }
    }
}

impl FruitListView {
    fn title(&self) -> String {
        self.slot
            .snapshot()
            .map(FruitListSnapshot::title)
            .unwrap_or_else(|| FruitListSnapshot::default().title())
    }

    fn row_count(&self) -> usize {
        self.slot.snapshot().map(|s| s.rows.len()).unwrap_or(0)
    }

    fn refresh_rows(&mut self, sender: &ComponentSender<Self>) {
        let Some(snapshot) = self.slot.snapshot() else {
            return;
        };
        let input_sender = sender.input_sender();
        let items = self
            .grid
            .current_page(&snapshot.rows)
            .into_iter()
            .map(|fruit| FruitListItem {
                fruit: fruit.clone(),
                sender: input_sender.clone(),
            });
        replace_items(&mut self.list_view_wrapper, items);
    }

    fn export(&self, sender: &ComponentSender<Self>, path: PathBuf) {
        let Some(snapshot) = self.slot.snapshot() else {
            return;
        };
        match self.grid.export_csv(&self.app_services.export(), &snapshot.rows) {
            Ok(bytes) => {
                sender.oneshot_command(async move {
                    let result = write_export(&path, LIST_EXPORT_FILE_NAME, bytes).await;
                    FruitListCmdMsg::ExportFinished(result)
                });
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to render CSV");
                let (kind, text) = export_notification(&Err(error));
                notify(sender, kind, text);
            }
        }
    }
}

fn notify(sender: &ComponentSender<FruitListView>, kind: NotificationKind, text: String) {
    let res = sender.output(FruitListOutputMsg::Notify { kind, text });
    if res.is_err() {
        tracing::error!("Failed to send notification");
    }
}
