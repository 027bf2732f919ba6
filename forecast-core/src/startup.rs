use std::sync::Arc;

use crate::{
    component::{App, Application},
    http::HttpClient,
    service::{HttpWeatherForecastService, WeatherForecastService},
};

/// Host element the root component is mounted onto.
pub const APP_ELEMENT: &str = "app";

/// Application-wide services. Built once at startup and passed by reference
/// to everything that needs them.
#[derive(Debug, Clone)]
pub struct Services {
    http: Arc<HttpClient>,
    weather_forecasts: Arc<dyn WeatherForecastService>,
}

impl Services {
    /// Registers [`HttpWeatherForecastService`] as the single forecast service.
    pub fn new(http: Arc<HttpClient>) -> Self {
        let weather_forecasts = Arc::new(HttpWeatherForecastService::new(Arc::clone(&http)));
        Self { http, weather_forecasts }
    }

    /// Same as [`Services::new`] but with a caller-supplied forecast service.
    ///
    /// The registry does not check that `weather_forecasts` talks through `http`.
    /// If the service captured a different client, [`Services::http`] no longer
    /// describes the handle the forecast service actually uses.
    pub fn with_weather_forecasts(
        http: Arc<HttpClient>,
        weather_forecasts: Arc<dyn WeatherForecastService>,
    ) -> Self {
        Self { http, weather_forecasts }
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Resolve the forecast service. Every call hands out the same instance.
    pub fn weather_forecasts(&self) -> Arc<dyn WeatherForecastService> {
        Arc::clone(&self.weather_forecasts)
    }
}

pub struct Startup;

impl Startup {
    pub fn configure_services(http: Arc<HttpClient>) -> Services {
        Services::new(http)
    }

    pub fn configure(app: &mut Application) {
        app.add_component(APP_ELEMENT, App);
    }

    /// Wire services and mount the root component.
    pub fn build(http: Arc<HttpClient>) -> Application {
        let mut app = Application::new(Self::configure_services(http));
        Self::configure(&mut app);
        app
    }
}
