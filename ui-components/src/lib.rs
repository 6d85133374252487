pub mod color_swatch;
pub mod country_flag_label;
pub mod drop_down;
pub mod star_rating;

pub use color_swatch::ColorSwatch;
pub use country_flag_label::CountryFlagLabel;
pub use drop_down::{
    DropDown, DropDownInit, DropDownItem, DropDownMessage, DropDownMsg, DropDownOutputMsg,
    PageSizeDropDown, PageSizeSelectedMsg,
};
pub use star_rating::StarRatingWidget;
