use relm4::{
    gtk,
    typed_view::list::{RelmListItem, TypedListView},
};

/// Replaces the whole content of the list, e.g. when the visible page changes.
pub fn replace_items<T, I>(list_view_wrapper: &mut TypedListView<T, gtk::NoSelection>, items: I)
where
    T: RelmListItem,
    I: IntoIterator<Item = T>,
{
    list_view_wrapper.clear();
    list_view_wrapper.extend_from_iter(items);
}
