use crate::server::{
    error::{config::ConfigError, AppError},
    model::payment::DriverShare,
};

/// Application configuration loaded from the environment.
pub struct Config {
    pub database_url: String,

    /// Fraction of an order's price paid to the driver.
    pub driver_share: DriverShare,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let driver_share = match std::env::var("DRIVER_SHARE") {
            Ok(value) => parse_driver_share(&value)?,
            Err(_) => DriverShare::default(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            driver_share,
        })
    }
}

fn parse_driver_share(value: &str) -> Result<DriverShare, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(DriverShare::from_fraction)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "DRIVER_SHARE".to_string(),
            value: value.to_string(),
            reason: "expected a fraction between 0 and 1, e.g. 0.70".to_string(),
        })
}
