use std::sync::{Arc, OnceLock};

use crate::{
    dashboard_service::DashboardService,
    error::Error,
    export_service::ExportService,
    fruit_actions::{FruitActionHooks, LoggingFruitActions},
    fruits_api_ops::{FruitsApiOps, HttpFruitsApi},
    settings::Settings,
};

pub fn create_app_services(settings: Settings) -> Result<Arc<AppServices>, Error> {
    let api = HttpFruitsApi::new(&settings)?;
    tracing::info!(
        base_url = %settings.api_base_url,
        timeout = ?settings.request_timeout,
        "Fruits API client created"
    );
    Ok(Arc::new(AppServices::new(
        Arc::new(api),
        Arc::new(LoggingFruitActions),
    )))
}

#[derive(Debug)]
pub struct AppServices {
    dashboard: OnceLock<Arc<DashboardService>>,
    export: OnceLock<Arc<ExportService>>,
    api: Arc<dyn FruitsApiOps>,
    fruit_actions: Arc<dyn FruitActionHooks>,
}

impl AppServices {
    pub fn new(
        api: Arc<dyn FruitsApiOps>,
        fruit_actions: Arc<dyn FruitActionHooks>,
    ) -> Self {
        Self {
            dashboard: OnceLock::new(),
            export: OnceLock::new(),
            api,
            fruit_actions,
        }
    }

    pub fn dashboard(&self) -> Arc<DashboardService> {
        self.dashboard
            .get_or_init(|| Arc::new(DashboardService::new(Arc::clone(&self.api))))
            .clone()
    }

    pub fn export(&self) -> Arc<ExportService> {
        self.export
            .get_or_init(|| Arc::new(ExportService::new()))
            .clone()
    }

    pub fn fruit_actions(&self) -> Arc<dyn FruitActionHooks> {
        Arc::clone(&self.fruit_actions)
    }
}
