use relm4::gtk::{self, gdk};

pub fn load_app_css() {
    let Some(display) = gdk::Display::default() else {
        tracing::warn!("No display available, skipping application CSS");
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_data(include_str!("style.css"));

    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
