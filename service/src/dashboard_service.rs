use std::sync::Arc;

use crate::{
    error::Error,
    fruits_api_ops::FruitsApiOps,
    view_models::{ExtendedDataSnapshot, FruitListSnapshot},
};

/// Loads the data for both dashboard views and turns it into view models.
#[derive(Debug)]
pub struct DashboardService {
    api: Arc<dyn FruitsApiOps>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn FruitsApiOps>) -> Self {
        Self { api }
    }

    pub async fn load_fruit_list(&self) -> Result<FruitListSnapshot, Error> {
        let fruits = self.api.fetch_fruits().await?;
        tracing::debug!(count = fruits.len(), "Fetched fruit list");
        Ok(FruitListSnapshot::from(fruits.as_slice()))
    }

    pub async fn load_extended_data(&self) -> Result<ExtendedDataSnapshot, Error> {
        let data = self.api.fetch_all_data().await?;
        tracing::debug!(
            count = data.fruits.len(),
            total_fruits = data.total_fruits,
            total_suppliers = data.total_suppliers,
            "Fetched all data"
        );
        Ok(ExtendedDataSnapshot::try_from(&data)?)
    }
}
