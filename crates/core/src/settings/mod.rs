pub mod memory_settings_repository;
pub mod settings_model;
pub mod settings_service;
pub mod settings_traits;

pub use memory_settings_repository::MemorySettingsRepository;
pub use settings_model::*;
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
