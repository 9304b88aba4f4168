use anyhow::Context;
use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub pricing: PricingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки ценообразования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PricingConfig {
    /// Залы с количеством мест не больше этого значения продаются по единой цене.
    pub small_hall_limit: usize,
    /// Цена передней половины зала (и всех мест в маленьком зале).
    pub front_price: u32,
    /// Цена задней половины большого зала.
    pub back_price: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            small_hall_limit: 60,
            front_price: 10,
            back_price: 8,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = PricingConfig::default();

        Ok(Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cinema_room=warn".to_string()),
            },
            pricing: PricingConfig {
                small_hall_limit: var_or("CINEMA_SMALL_HALL_LIMIT", defaults.small_hall_limit)?,
                front_price: var_or("CINEMA_FRONT_PRICE", defaults.front_price)?,
                back_price: var_or("CINEMA_BACK_PRICE", defaults.back_price)?,
            },
        })
    }
}

// Читает числовую переменную окружения, если она задана
fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
