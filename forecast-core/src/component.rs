use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

use crate::{model::WeatherForecast, startup::Services};

/// Renderable UI unit. Components pull what they need from [`Services`].
#[async_trait]
pub trait Component: Send + Sync + Debug {
    async fn render(&self, services: &Services) -> String;
}

/// Output of one mounted component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    pub selector: String,
    pub content: String,
}

/// Services plus the components mounted onto named host elements.
#[derive(Debug)]
pub struct Application {
    services: Services,
    mounts: Vec<(String, Box<dyn Component>)>,
}

impl Application {
    pub fn new(services: Services) -> Self {
        Self { services, mounts: Vec::new() }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Attach `component` to the host element named `selector`.
    pub fn add_component(&mut self, selector: &str, component: impl Component + 'static) {
        self.mounts.push((selector.to_string(), Box::new(component)));
    }

    pub fn selectors(&self) -> Vec<&str> {
        self.mounts.iter().map(|(selector, _)| selector.as_str()).collect()
    }

    /// Render every mounted component in mount order.
    pub async fn render(&self) -> Vec<RenderedElement> {
        let mut rendered = Vec::with_capacity(self.mounts.len());
        for (selector, component) in &self.mounts {
            rendered.push(RenderedElement {
                selector: selector.clone(),
                content: component.render(&self.services).await,
            });
        }
        rendered
    }
}

/// Root component: the fetch-data page.
#[derive(Debug, Clone, Copy, Default)]
pub struct App;

#[async_trait]
impl Component for App {
    async fn render(&self, services: &Services) -> String {
        let mut out = String::from(
            "Weather forecast\n\nThis component demonstrates fetching data from the server.\n\n",
        );

        match services.weather_forecasts().weather_forecasts().await {
            Ok(forecasts) if forecasts.is_empty() => out.push_str("No forecasts available.\n"),
            Ok(forecasts) => out.push_str(&render_table(&forecasts)),
            Err(err) => {
                warn!(error = %err, "forecast fetch failed");
                out.push_str(&format!("Forecast data is unavailable: {err}\n"));
            }
        }

        out
    }
}

/// Plain-text table with columns sized to their content.
pub fn render_table(forecasts: &[WeatherForecast]) -> String {
    const HEADERS: [&str; 4] = ["Date", "Temp. (C)", "Temp. (F)", "Summary"];

    let rows: Vec<[String; 4]> = forecasts
        .iter()
        .map(|f| {
            [
                f.date.format("%Y-%m-%d").to_string(),
                f.temperature_c.to_string(),
                f.temperature_f().to_string(),
                f.summary.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
