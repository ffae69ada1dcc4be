use async_trait::async_trait;
use dashmap::DashMap;

use super::SettingsRepositoryTrait;
use crate::errors::{DatabaseError, Result};

/// Volatile settings store.
#[derive(Default)]
pub struct MemorySettingsRepository {
    values: DashMap<String, String>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MemorySettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.values
            .get(setting_key)
            .map(|value| value.clone())
            .ok_or_else(|| DatabaseError::NotFound(format!("setting '{}'", setting_key)).into())
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.values
            .insert(setting_key.to_string(), setting_value.to_string());
        Ok(())
    }
}
