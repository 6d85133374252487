use relm4::gtk;
use relm4::gtk::prelude::*;
use relm4::prelude::*;
use std::fmt::Display;
use std::marker::PhantomData;

/// Generic trait for items that can be displayed in a dropdown
pub trait DropDownItem: Clone + Display + PartialEq + std::fmt::Debug + 'static {}

/// Generic trait for messages that can be sent when an item is selected
pub trait DropDownMessage<T: DropDownItem>: std::fmt::Debug {
    /// Create a new selection message with the given item
    fn from_selection(item: T) -> Self;
}

#[derive(Debug)]
pub struct DropDownInit<T: DropDownItem> {
    pub items: Vec<T>,
    pub selected: Option<T>,
}

#[derive(Debug)]
pub struct DropDown<T, M>
where
    T: DropDownItem,
    M: DropDownMessage<T> + 'static,
{
    items: Vec<T>,
    selected_index: Option<u32>,
    _phantom: PhantomData<M>,
}

#[derive(Debug)]
pub enum DropDownMsg<T, M>
where
    T: DropDownItem,
    M: DropDownMessage<T>,
{
    SelectionChanged(u32),
    _Phantom(PhantomData<(T, M)>),
}

#[derive(Debug)]
pub enum DropDownOutputMsg<T, M>
where
    T: DropDownItem,
    M: DropDownMessage<T> + 'static,
{
    ItemSelected(M),
    _Phantom(PhantomData<T>),
}

#[relm4::component(pub)]
impl<T, M> Component for DropDown<T, M>
where
    T: DropDownItem,
    M: DropDownMessage<T> + 'static,
{
    type Init = DropDownInit<T>;
    type Input = DropDownMsg<T, M>;
    type Output = DropDownOutputMsg<T, M>;
    type CommandOutput = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 6,

            gtk::DropDown {
                set_model: Some(&string_list),
                #[watch]
                set_selected: model.selected_index.unwrap_or(0),
                connect_selected_notify[sender] => move |dropdown| {
                    sender.input(DropDownMsg::SelectionChanged(dropdown.selected()));
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let DropDownInit { items, selected } = init;

        let initial_index = selected
            .as_ref()
            .and_then(|item| items.iter().position(|i| i == item))
            .map(|pos| pos as u32);

        let item_strings: Vec<String> = items.iter().map(|item| item.to_string()).collect();
        let string_refs: Vec<&str> = item_strings.iter().map(|s| s.as_str()).collect();
        let string_list = gtk::StringList::new(&string_refs);

        let model = Self {
            items,
            selected_index: initial_index,
            _phantom: PhantomData,
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            DropDownMsg::SelectionChanged(index) => {
                // #[watch] refreshes re-emit selected-notify
                if self.selected_index == Some(index) {
                    return;
                }
                self.selected_index = Some(index);

                if let Some(item) = self.items.get(index as usize) {
                    let message = M::from_selection(item.clone());
                    sender
                        .output(DropDownOutputMsg::ItemSelected(message))
                        .unwrap_or_else(|err| {
                            tracing::error!(error = ?err, "Error sending output message");
                        });
                }
            }
            DropDownMsg::_Phantom(_) => {}
        }
    }
}

// PageSize-specific implementation
use core_types::PageSize;

impl DropDownItem for PageSize {}

#[derive(Debug, Clone)]
pub enum PageSizeSelectedMsg {
    PageSizeSelected(PageSize),
}

impl DropDownMessage<PageSize> for PageSizeSelectedMsg {
    fn from_selection(item: PageSize) -> Self {
        PageSizeSelectedMsg::PageSizeSelected(item)
    }
}

pub type PageSizeDropDown = DropDown<PageSize, PageSizeSelectedMsg>;
