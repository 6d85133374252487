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
    export_service::{EXTENDED_EXPORT_FILE_NAME, write_export},
    fetch_state::{FetchOutcome, FetchTicket, ViewDisplay, ViewSlot},
    view_models::{ExtendedColumn, ExtendedDataSnapshot},
};
use ui_components::{DropDownInit, DropDownOutputMsg, PageSizeDropDown, PageSizeSelectedMsg};

use crate::{
    extended_list_item::ExtendedFruitItem,
    grid_view::{GridMsg, GridView, export_notification, fetch_notification},
    notification_bar::NotificationKind,
    utils::{
        grid_utils::{SortHeader, widths},
        typed_list_view_utils::replace_items,
        view_utils::{EMPTY_STATE_TEXT, choose_export_folder},
    },
};

#[derive(Debug)]
pub enum ExtendedDataMsg {
    Fetch,
    Grid(GridMsg<ExtendedColumn>),
    Export,
    ExportFolderSelected(PathBuf),
}

#[derive(Debug)]
pub enum ExtendedDataCmdMsg {
    Fetched(FetchTicket, Result<ExtendedDataSnapshot, Error>),
    ExportFinished(Result<PathBuf, Error>),
}

#[derive(Debug)]
pub enum ExtendedDataOutputMsg {
    Notify { kind: NotificationKind, text: String },
}

#[derive(Debug)]
pub struct ExtendedDataInit {
    pub app_services: Arc<AppServices>,
}

/// Joined fruit, nutrition and supplier data. Fetched every time the tab is
/// activated and on refresh.
pub struct ExtendedDataView {
    app_services: Arc<AppServices>,
    slot: ViewSlot<ExtendedDataSnapshot>,
    grid: GridView<ExtendedColumn>,
    list_view_wrapper: TypedListView<ExtendedFruitItem, gtk::NoSelection>,
    page_size_dropdown: Controller<PageSizeDropDown>,
}

#[relm4::component(pub)]
impl Component for ExtendedDataView {
    type Init = ExtendedDataInit;
    type Input = ExtendedDataMsg;
    type Output = ExtendedDataOutputMsg;
    type CommandOutput = ExtendedDataCmdMsg;

    view! {
        #[root]
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 10,
            set_margin_all: 10,

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 6,

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_hexpand: true,

                    gtk::Label {
                        set_xalign: 0.0,
                        set_label: "Extended Fruit Data",
                        add_css_class: "title-4",
                    },

                    gtk::Label {
                        set_xalign: 0.0,
                        add_css_class: "dim-label",
                        #[watch]
                        set_visible: model.slot.snapshot().is_some(),
                        #[watch]
                        set_label: &model.totals_label(),
                    },
                },

                gtk::SearchEntry {
                    set_placeholder_text: Some("Search…"),
                    connect_search_changed[sender] => move |entry| {
                        sender.input(ExtendedDataMsg::Grid(GridMsg::QuickFilterChanged(
                            entry.text().to_string(),
                        )));
                    },
                },

                gtk::Button {
                    set_icon_name: "document-save-symbolic",
                    set_tooltip_text: Some("Export CSV"),
                    #[watch]
                    set_sensitive: model.grid.page_info().total > 0,
                    connect_clicked => ExtendedDataMsg::Export,
                },

                gtk::Button {
                    set_icon_name: "view-refresh-symbolic",
                    set_tooltip_text: Some("Refresh"),
                    #[watch]
                    set_sensitive: !model.slot.is_loading(),
                    connect_clicked => ExtendedDataMsg::Fetch,
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
                    connect_clicked => ExtendedDataMsg::Grid(GridMsg::PreviousPage),
                },

                gtk::Button {
                    set_icon_name: "go-next-symbolic",
                    #[watch]
                    set_sensitive: model.grid.page_info().has_next,
                    connect_clicked => ExtendedDataMsg::Grid(GridMsg::NextPage),
                },
            },
        }
    }

    fn init(
        init_model: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let view_kind = ViewKind::Extended;
        let page_size = view_kind.default_page_size();

        let page_size_dropdown = PageSizeDropDown::builder()
            .launch(DropDownInit {
                items: view_kind.page_sizes().to_vec(),
                selected: Some(page_size),
            })
            .forward(sender.input_sender(), |msg| match msg {
                DropDownOutputMsg::ItemSelected(PageSizeSelectedMsg::PageSizeSelected(size)) => {
                    ExtendedDataMsg::Grid(GridMsg::PageSizeChanged(size))
                }
                _ => unreachable!(),
            });

        let mut model = ExtendedDataView {
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
                (ExtendedColumn::Id, widths::EXT_ID),
                (ExtendedColumn::Name, widths::EXT_NAME),
                (ExtendedColumn::Origin, widths::EXT_ORIGIN),
                (ExtendedColumn::Taste, widths::EXT_TASTE),
                (ExtendedColumn::Nutrition, widths::EXT_NUTRITION),
                (ExtendedColumn::Supplier, widths::EXT_SUPPLIER),
                (ExtendedColumn::Status, widths::EXT_STATUS),
                (ExtendedColumn::Price, widths::EXT_PRICE),
                (ExtendedColumn::DateAdded, widths::EXT_DATE),
            ],
            clone!(
                #[strong]
                sender,
                move |column| sender.input(ExtendedDataMsg::Grid(GridMsg::SortBy(column)))
            ),
        );
        model.grid.set_sort_header(sort_header);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, root: &Self::Root) {
        match msg {
            ExtendedDataMsg::Fetch => {
                let ticket = self.slot.begin_fetch();
                tracing::debug!(?ticket, "Fetching all data");
                let dashboard = self.app_services.dashboard();
                sender.oneshot_command(async move {
                    let result = dashboard.load_extended_data().await;
                    ExtendedDataCmdMsg::Fetched(ticket, result)
                });
            }
            ExtendedDataMsg::Grid(msg) => {
                self.grid.apply(msg);
                self.refresh_rows();
            }
            ExtendedDataMsg::Export => {
                choose_export_folder(root, "Export extended data", move |path| {
                    sender.input(ExtendedDataMsg::ExportFolderSelected(path));
                });
            }
            ExtendedDataMsg::ExportFolderSelected(path) => self.export(&sender, path),
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            ExtendedDataCmdMsg::Fetched(ticket, result) => {
                let outcome = self.slot.complete(ticket, result);
                match &outcome {
                    FetchOutcome::Loaded => {
                        tracing::info!(totals = %self.totals_label(), "All data loaded");
                        self.refresh_rows();
                    }
                    FetchOutcome::Failed(error) => {
                        tracing::error!(error = %error, "Failed to load all data");
                    }
                    FetchOutcome::Stale => {}
                }
                let notification = fetch_notification(
                    &outcome,
                    "All data loaded successfully",
                    "Failed to load all data",
                );
                if let Some((kind, text)) = notification {
                    notify(&sender, kind, text);
                }
            }
            ExtendedDataCmdMsg::ExportFinished(result) => {
                if let Err(error) = &result {
                    tracing::error!(error = %error, "CSV export failed");
                }
                let (kind, text) = export_notification(&result);
                notify(&sender, kind, text);
            }
        }
    }
}

impl ExtendedDataView {
    fn totals_label(&self) -> String {
        self.slot
            .snapshot()
            .map(ExtendedDataSnapshot::totals_label)
            .unwrap_or_default()
    }

    fn refresh_rows(&mut self) {
        let Some(snapshot) = self.slot.snapshot() else {
            return;
        };
        let items = self
            .grid
            .current_page(&snapshot.rows)
            .into_iter()
            .map(|row| ExtendedFruitItem { row: row.clone() });
        replace_items(&mut self.list_view_wrapper, items);
    }

    fn export(&self, sender: &ComponentSender<Self>, path: PathBuf) {
        let Some(snapshot) = self.slot.snapshot() else {
            return;
        };
        match self.grid.export_csv(&self.app_services.export(), &snapshot.rows) {
            Ok(bytes) => {
                sender.oneshot_command(async move {
                    let result = write_export(&path, EXTENDED_EXPORT_FILE_NAME, bytes).await;
                    ExtendedDataCmdMsg::ExportFinished(result)
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

fn notify(sender: &ComponentSender<ExtendedDataView>, kind: NotificationKind, text: String) {
    let res = sender.output(ExtendedDataOutputMsg::Notify { kind, text });
    if res.is_err() {
        tracing::error!("Failed to send notification");
    }
}
