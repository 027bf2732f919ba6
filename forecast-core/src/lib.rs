//! Core library for the `forecast` client.
//!
//! This crate defines:
//! - The forecast record shared with the backend
//! - The forecast service contract and its web API implementation
//! - The shared HTTP handle and on-disk configuration
//! - The composition root that wires services and mounts the root component
//!
//! It is used by `forecast-cli`, but the services can be reused by any other host.

pub mod component;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod service;
pub mod startup;

pub use component::{App, Application, Component, RenderedElement};
pub use config::Config;
pub use error::FetchError;
pub use http::HttpClient;
pub use model::{ForecastCollection, WeatherForecast};
pub use service::{HttpWeatherForecastService, WeatherForecastService};
pub use startup::{APP_ELEMENT, Services, Startup};
