use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::FetchError, model::ForecastCollection};

pub mod http;

pub use http::{HttpWeatherForecastService, WEATHER_FORECASTS_PATH};

/// Source of weather forecast data.
#[async_trait]
pub trait WeatherForecastService: Send + Sync + Debug {
    /// Fetch the current forecasts, in the order the backend returns them.
    async fn weather_forecasts(&self) -> Result<ForecastCollection, FetchError>;
}
