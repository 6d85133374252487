use std::path::PathBuf;

use core_types::PageSize;
use service::{
    error::Error,
    export_service::ExportService,
    fetch_state::FetchOutcome,
    grid::{GridColumn, GridRow, GridState},
};

use crate::{
    notification_bar::NotificationKind,
    utils::{grid_utils::SortHeader, view_utils::PageInfo},
};

/// Grid interactions common to both dashboard views.
#[derive(Debug)]
pub enum GridMsg<C> {
    QuickFilterChanged(String),
    SortBy(C),
    PageSizeChanged(PageSize),
    PreviousPage,
    NextPage,
}

/// Filter, sort and paging state of one view together with what its header
/// and footer show.
#[derive(Debug)]
pub struct GridView<C: GridColumn> {
    grid: GridState<C>,
    page_info: PageInfo,
    sort_header: Option<SortHeader<C>>,
}

impl<C: GridColumn> GridView<C> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            grid: GridState::new(page_size.rows()),
            page_info: PageInfo::default(),
            sort_header: None,
        }
    }

    pub fn set_sort_header(&mut self, sort_header: SortHeader<C>) {
        self.sort_header = Some(sort_header);
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn apply(&mut self, msg: GridMsg<C>) {
        match msg {
            GridMsg::QuickFilterChanged(text) => self.grid.set_quick_filter(&text),
            GridMsg::SortBy(column) => {
                self.grid.toggle_sort(column);
                if let Some(header) = &self.sort_header {
                    header.update(self.grid.sort());
                }
            }
            GridMsg::PageSizeChanged(size) => self.grid.set_page_size(size.rows()),
            GridMsg::PreviousPage => self.grid.set_page(self.page_info.page.saturating_sub(1)),
            GridMsg::NextPage => self.grid.set_page(self.page_info.page + 1),
        }
    }

    /// Rows of the current page. Also refreshes the footer state.
    pub fn current_page<'a, R: GridRow<Column = C>>(&mut self, rows: &'a [R]) -> Vec<&'a R> {
        let page = self.grid.page(rows);
        self.page_info = PageInfo::from(&page);
        page.rows
    }

    /// CSV of every row passing the filter, in sort order, across all pages.
    pub fn export_csv<R: GridRow<Column = C>>(
        &self,
        export: &ExportService,
        rows: &[R],
    ) -> Result<Vec<u8>, Error> {
        export.to_csv(&self.grid.visible_rows(rows))
    }
}

/// Notification for a finished fetch; stale results stay silent.
pub fn fetch_notification(
    outcome: &FetchOutcome,
    loaded_text: &str,
    failed_text: &str,
) -> Option<(NotificationKind, String)> {
    match outcome {
        FetchOutcome::Loaded => Some((NotificationKind::Success, loaded_text.to_string())),
        FetchOutcome::Failed(error) => Some((
            NotificationKind::Error,
            format!("{}: {}", failed_text, error),
        )),
        FetchOutcome::Stale => None,
    }
}

pub fn export_notification(result: &Result<PathBuf, Error>) -> (NotificationKind, String) {
    match result {
        Ok(path) => (
            NotificationKind::Success,
            format!("Exported to {}", path.display()),
        ),
        Err(error) => (NotificationKind::Error, format!("Export failed: {}", error)),
    }
}
