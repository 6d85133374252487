mod app;
mod extended_data_view;
mod extended_list_item;
mod fruit_list_view;
mod grid_view;
mod list_item;
mod logging;
mod notification_bar;
mod style;
mod utils;

use app::{AppInit, AppModel};
use relm4::RelmApp;
use service::{app_services::create_app_services, settings::Settings};

fn main() {
    // Keep the guard alive for the lifetime of the application
    let _guard = logging::init_logging();

    let (settings, startup_error) = match Settings::from_env() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    if let Some(error) = &startup_error {
        tracing::warn!(error = %error, "Invalid configuration, falling back to defaults");
    }

    let (app_services, startup_error) = match create_app_services(settings) {
        Ok(app_services) => (app_services, startup_error),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create services, retrying with defaults");
            match create_app_services(Settings::default()) {
                Ok(app_services) => (app_services, Some(e)),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create services with defaults");
                    std::process::exit(1);
                }
            }
        }
    };

    tracing::info!("Starting Fruits Dashboard");

    let app = RelmApp::new("org.fruits.dashboard");
    app.run::<AppModel>(AppInit {
        app_services,
        startup_error,
    });
}
