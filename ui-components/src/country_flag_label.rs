use domain::CountryFlag;
use relm4::gtk;
use relm4::gtk::prelude::*;

/// Flag emoji followed by the country name. Countries without a flag show
/// just the name.
#[derive(Debug, Clone)]
pub struct CountryFlagLabel {
    root: gtk::Box,
    flag: gtk::Label,
    country: gtk::Label,
}

impl Default for CountryFlagLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryFlagLabel {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let flag = gtk::Label::new(None);
        flag.add_css_class("country-flag");
        let country = gtk::Label::new(None);
        country.set_xalign(0.0);
        root.append(&flag);
        root.append(&country);
        Self {
            root,
            flag,
            country,
        }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn set_flag(&self, flag: &CountryFlag) {
        match flag {
            CountryFlag::Icon { code, emoji, .. } => {
                self.flag.set_label(emoji);
                self.flag.set_tooltip_text(Some(code));
                self.flag.set_visible(true);
            }
            CountryFlag::TextOnly { .. } => {
                self.flag.set_label("");
                self.flag.set_visible(false);
            }
        }
        self.country.set_label(flag.country());
    }
}
