use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use core_types::{AllData, BasicFruit};

use crate::{error::Error, fruits_api_ops::FruitsApiOps};

/// Internal state for MockFruitsApi
#[derive(Debug)]
struct MockState {
    fruits: Result<Vec<BasicFruit>, Error>,
    all_data: Result<AllData, Error>,
    fruits_calls: usize,
    all_data_calls: usize,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            fruits: Ok(Vec::new()),
            all_data: Ok(AllData {
                fruits: Vec::new(),
                total_fruits: 0,
                total_suppliers: 0,
                total_nutritional_records: 0,
            }),
            fruits_calls: 0,
            all_data_calls: 0,
        }
    }
}

/// Mock implementation of FruitsApiOps for testing
///
/// Responses are configured up front and returned for every call until
/// replaced. Call counts can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockFruitsApi {
    state: Arc<Mutex<MockState>>,
}

impl MockFruitsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fruits(&self, fruits: Vec<BasicFruit>) {
        self.state.lock().unwrap().fruits = Ok(fruits);
    }

    pub fn fail_fruits_with(&self, error: Error) {
        self.state.lock().unwrap().fruits = Err(error);
    }

    pub fn set_all_data(&self, data: AllData) {
        self.state.lock().unwrap().all_data = Ok(data);
    }

    pub fn fail_all_data_with(&self, error: Error) {
        self.state.lock().unwrap().all_data = Err(error);
    }

    pub fn fruits_calls(&self) -> usize {
        self.state.lock().unwrap().fruits_calls
    }

    pub fn all_data_calls(&self) -> usize {
        self.state.lock().unwrap().all_data_calls
    }
}

#[async_trait]
impl FruitsApiOps for MockFruitsApi {
    async fn fetch_fruits(&self) -> Result<Vec<BasicFruit>, Error> {
        let mut state = self.state.lock().unwrap();
        state.fruits_calls += 1;
        state.fruits.clone()
    }

    async fn fetch_all_data(&self) -> Result<AllData, Error> {
        let mut state = self.state.lock().unwrap();
        state.all_data_calls += 1;
        state.all_data.clone()
    }
}
