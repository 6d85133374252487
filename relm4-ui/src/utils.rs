pub mod dialog_utils;
pub mod grid_utils;
pub mod typed_list_view_utils;
pub mod view_utils;
