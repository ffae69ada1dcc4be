use super::SettingsRepositoryTrait;
use crate::constants::CURRENCY_SETTING_KEY;
use crate::errors::{DatabaseError, Error, Result};
use crate::presentation::currency::{find_currency, DEFAULT_CURRENCY};
use crate::settings::{Settings, SettingsUpdate};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<Settings>;

    /// Preferred display currency; the default currency when unset.
    fn get_currency(&self) -> Result<String>;

    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(Settings {
            currency: self.get_currency()?,
        })
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<Settings> {
        if let Some(ref code) = new_settings.currency {
            let currency =
                find_currency(code).ok_or_else(|| Error::UnsupportedCurrency(code.clone()))?;
            debug!("Setting preferred currency to {}", currency.code);
            self.settings_repository
                .update_setting(CURRENCY_SETTING_KEY, currency.code)
                .await?;
        }
        self.get_settings()
    }

    fn get_currency(&self) -> Result<String> {
        match self.get_setting_value(CURRENCY_SETTING_KEY)? {
            Some(code) if find_currency(&code).is_some() => Ok(code),
            Some(code) => {
                warn!(
                    "Stored currency '{}' is not supported. Using {}.",
                    code, DEFAULT_CURRENCY.code
                );
                Ok(DEFAULT_CURRENCY.code.to_string())
            }
            None => Ok(DEFAULT_CURRENCY.code.to_string()),
        }
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsRepository;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(MemorySettingsRepository::new()))
    }

    #[test]
    fn defaults_to_usd() {
        assert_eq!(service().get_settings().unwrap().currency, "USD");
    }

    #[tokio::test]
    async fn persists_supported_currency() {
        let service = service();
        let updated = service
            .update_settings(&SettingsUpdate {
                currency: Some("JPY".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(updated.currency, "JPY");
        assert_eq!(service.get_currency().unwrap(), "JPY");
    }

    #[tokio::test]
    async fn rejects_unknown_currency() {
        let service = service();
        let result = service
            .update_settings(&SettingsUpdate {
                currency: Some("XYZ".to_string()),
            })
            .await;
        assert!(matches!(result, Err(Error::UnsupportedCurrency(code)) if code == "XYZ"));
        assert_eq!(service.get_currency().unwrap(), "USD");
    }

    #[tokio::test]
    async fn unknown_stored_value_falls_back() {
        let repository = Arc::new(MemorySettingsRepository::new());
        repository
            .update_setting(CURRENCY_SETTING_KEY, "ZZZ")
            .await
            .unwrap();
        let service = SettingsService::new(repository);
        assert_eq!(service.get_currency().unwrap(), "USD");
    }
}
