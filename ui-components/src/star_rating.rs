use domain::StarRating;
use relm4::gtk;
use relm4::gtk::prelude::*;

/// Read-only star row with the numeric label next to it, e.g. `★★★★⯨ 4.5`.
///
/// Plain widget wrapper rather than a component so list rows can create one
/// in `setup` and rebind it per item.
#[derive(Debug, Clone)]
pub struct StarRatingWidget {
    root: gtk::Box,
    stars: gtk::Label,
    value: gtk::Label,
}

impl Default for StarRatingWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl StarRatingWidget {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let stars = gtk::Label::new(None);
        stars.add_css_class("rating-stars");
        let value = gtk::Label::new(None);
        value.add_css_class("dim-label");
        root.append(&stars);
        root.append(&value);
        Self { root, stars, value }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn set_rating(&self, rating: &StarRating) {
        self.stars.set_label(&rating.stars());
        self.value.set_label(&rating.label());
        self.root
            .set_tooltip_text(Some(&format!("{} out of 5", rating.label())));
    }
}
