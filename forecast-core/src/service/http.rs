use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::{error::FetchError, http::HttpClient, model::ForecastCollection};

use super::WeatherForecastService;

/// Relative path of the forecast endpoint on the backend.
pub const WEATHER_FORECASTS_PATH: &str = "api/SampleData/WeatherForecasts";

/// Forecast service backed by the web API. The `HttpClient` is shared with the
/// rest of the application and is never reconfigured here.
#[derive(Debug, Clone)]
pub struct HttpWeatherForecastService {
    http: Arc<HttpClient>,
}

impl HttpWeatherForecastService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

#[async_trait]
impl WeatherForecastService for HttpWeatherForecastService {
    #[instrument(skip(self), fields(base_url = %self.http.base_url()))]
    async fn weather_forecasts(&self) -> Result<ForecastCollection, FetchError> {
        self.http.get_json(WEATHER_FORECASTS_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherForecast;
    use chrono::NaiveDate;
    use url::Url;

    const ENDPOINT: &str = "/api/SampleData/WeatherForecasts";

    fn service_for(server: &mockito::ServerGuard) -> HttpWeatherForecastService {
        let client = HttpClient::new(Url::parse(&server.url()).unwrap()).unwrap();
        HttpWeatherForecastService::new(Arc::new(client))
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn returns_records_in_server_order() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"date":"2019-03-03T00:00:00","temperatureC":30,"temperatureF":85,"summary":"Hot"},
                    {"date":"2019-03-01T00:00:00","temperatureC":-5,"temperatureF":24,"summary":"Freezing"},
                    {"date":"2019-03-02T00:00:00","temperatureC":12,"temperatureF":53,"summary":null},
                    {"date":"2019-03-02T00:00:00","temperatureC":12,"temperatureF":53,"summary":null}
                ]"#,
            )
            .create_async()
            .await;

        let forecasts = service_for(&server).weather_forecasts().await.unwrap();

        assert_eq!(
            forecasts,
            vec![
                WeatherForecast::new(day(2019, 3, 3), 30, Some("Hot".into())),
                WeatherForecast::new(day(2019, 3, 1), -5, Some("Freezing".into())),
                WeatherForecast::new(day(2019, 3, 2), 12, None),
                WeatherForecast::new(day(2019, 3, 2), 12, None),
            ]
        );
    }

    #[tokio::test]
    async fn empty_array_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let forecasts = service_for(&server).weather_forecasts().await.unwrap();
        assert!(forecasts.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_fails_without_data() {
        let mut server = mockito::Server::new_async().await;
        // A well-formed body must still be rejected on a failing status.
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"date":"2019-03-01","temperatureC":1,"summary":"Cool"}]"#)
            .create_async()
            .await;

        let err = service_for(&server).weather_forecasts().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"date":"2019-03-01","temperatureC":"#)
            .create_async()
            .await;

        let err = service_for(&server).weather_forecasts().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn invalid_utf8_body_fails() {
        let body: &[u8] = b"[{\"date\":\"2019-03-01\",\"temperatureC\":1,\"summary\":\"Co\xFFl\"}]";
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let err = service_for(&server).weather_forecasts().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn wrong_shape_fails() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_body(r#"{"date":"2019-03-01","temperatureC":1}"#)
            .create_async()
            .await;

        let err = service_for(&server).weather_forecasts().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn each_call_is_one_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ENDPOINT)
            .with_status(200)
            .with_body("[]")
            .expect(3)
            .create_async()
            .await;

        let service = service_for(&server);
        service.weather_forecasts().await.unwrap();

        let (a, b) = tokio::join!(service.weather_forecasts(), service.weather_forecasts());
        a.unwrap();
        b.unwrap();

        mock.assert_async().await;
    }
}
