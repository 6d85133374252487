pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod export_service;
pub mod fetch_state;
pub mod fruit_actions;
pub mod fruits_api_ops;
pub mod grid;
pub mod mock_fruits_api;
pub mod settings;
pub mod view_models;
