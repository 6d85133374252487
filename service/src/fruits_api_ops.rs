use async_trait::async_trait;
use core_types::{AllData, BasicFruit};
use fruits_api::FruitsApiClient;

use crate::{error::Error, settings::Settings};

/// Read-only access to the two fruits API endpoints.
#[async_trait]
pub trait FruitsApiOps: Send + Sync + std::fmt::Debug {
    async fn fetch_fruits(&self) -> Result<Vec<BasicFruit>, Error>;
    async fn fetch_all_data(&self) -> Result<AllData, Error>;
}

#[derive(Debug)]
pub struct HttpFruitsApi {
    client: FruitsApiClient,
}

impl HttpFruitsApi {
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let client = FruitsApiClient::new(&settings.api_base_url, settings.request_timeout)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FruitsApiOps for HttpFruitsApi {
    async fn fetch_fruits(&self) -> Result<Vec<BasicFruit>, Error> {
        Ok(self.client.get_fruits().await?)
    }

    async fn fetch_all_data(&self) -> Result<AllData, Error> {
        Ok(self.client.get_all_data().await?)
    }
}
