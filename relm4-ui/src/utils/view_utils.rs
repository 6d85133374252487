use std::path::PathBuf;

use relm4::gtk::{
    self,
    gio::{self, prelude::FileExt},
    prelude::{Cast, DialogExt, FileChooserExt, FileChooserExtManual, GtkWindowExt, IsA, WidgetExt},
};
use service::grid::GridPage;

pub const EMPTY_STATE_TEXT: &str = "No data available. Click refresh to load data.";

/// Pagination state shown in a view footer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    pub page: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub range_label: String,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 0,
            total: 0,
            has_previous: false,
            has_next: false,
            range_label: "0–0 of 0".to_string(),
        }
    }
}

impl<R> From<&GridPage<'_, R>> for PageInfo {
    fn from(page: &GridPage<'_, R>) -> Self {
        Self {
            page: page.page,
            total: page.total,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            range_label: page.range_label(),
        }
    }
}

/// Asks for a target folder, starting from the user's download directory,
/// and calls `on_selected` with it.
pub fn choose_export_folder<W, F>(widget: &W, title: &str, on_selected: F)
where
    W: IsA<gtk::Widget>,
    F: Fn(PathBuf) + 'static,
{
    let window = widget.root().and_then(|root| root.downcast::<gtk::Window>().ok());

    let dialog = gtk::FileChooserDialog::builder()
        .title(title)
        .action(gtk::FileChooserAction::SelectFolder)
        .modal(true)
        .build();
    dialog.set_transient_for(window.as_ref());
    dialog.add_button("Cancel", gtk::ResponseType::Cancel);
    dialog.add_button("Export", gtk::ResponseType::Accept);

    let default_dir = gio::File::for_path(file_system::get_default_export_dir());
    if let Err(e) = dialog.set_current_folder(Some(&default_dir)) {
        tracing::warn!(error = %e, "Failed to preselect export folder");
    }

    dialog.connect_response(move |dialog, response| {
        if response == gtk::ResponseType::Accept
            && let Some(path) = dialog.file().and_then(|f| f.path())
        {
            on_selected(path);
        }
        dialog.close();
    });

    dialog.present();
}
