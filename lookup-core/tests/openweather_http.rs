//! HTTP-level tests for the OpenWeatherMap source and the full widget,
//! driven against a wiremock server.

use std::sync::{Arc, Mutex};

use lookup_core::{
    Config, LocationQuery, LookupError, OpenWeatherSource, RenderTarget, View, WeatherLookup,
    WeatherSource,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "name": "London",
        "dt": 1714564800,
        "main": {
            "temp": 18.5,
            "feels_like": 17.2,
            "humidity": 64
        },
        "weather": [
            { "description": "light rain", "icon": "10d" }
        ],
        "wind": { "speed": 10.0 }
    })
}

fn source_for(server: &MockServer) -> OpenWeatherSource {
    OpenWeatherSource::new("TEST_KEY".to_string(), server.uri())
}

fn query(city: &str) -> LocationQuery {
    LocationQuery::parse(city).expect("test city must be non-empty")
}

/// Surface that records every rendered view.
#[derive(Debug, Clone, Default)]
struct RecordingSurface {
    views: Arc<Mutex<Vec<View>>>,
}

impl RecordingSurface {
    fn rendered(&self) -> Vec<View> {
        self.views.lock().expect("recorder lock").clone()
    }
}

impl RenderTarget for RecordingSurface {
    fn render(&mut self, view: &View) {
        self.views.lock().expect("recorder lock").push(view.clone());
    }
}

#[tokio::test]
async fn successful_response_maps_all_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&server)
        .await;

    let reading = source_for(&server)
        .current(&query("London"))
        .await
        .expect("successful response must parse");

    assert_eq!(reading.location_name, "London");
    assert_eq!(reading.temperature_c, 18.5);
    assert_eq!(reading.feels_like_c, 17.2);
    assert_eq!(reading.humidity_pct, 64);
    assert_eq!(reading.description, "light rain");
    assert_eq!(reading.icon, "10d");
    assert_eq!(reading.wind_speed_mps, 10.0);
}

#[tokio::test]
async fn empty_condition_array_falls_back_to_placeholders() {
    let server = MockServer::start().await;

    let mut body = sample_current_response();
    body["weather"] = serde_json::json!([]);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let reading = source_for(&server)
        .current(&query("London"))
        .await
        .expect("response without conditions must still parse");

    assert_eq!(reading.description, "N/A");
    assert_eq!(reading.icon, "");
}

#[tokio::test]
async fn not_found_surfaces_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = source_for(&server).current(&query("Nowhere")).await.unwrap_err();

    match err {
        LookupError::Provider { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = source_for(&server).current(&query("London")).await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("500"));
    assert!(!rendered.contains("oops"));
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = source_for(&server).current(&query("London")).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Bind and immediately drop a server so the port refuses connections.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let source = OpenWeatherSource::new("TEST_KEY".to_string(), uri);
    let err = source.current(&query("London")).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

fn widget_for(server: &MockServer, config: Config) -> (WeatherLookup<RecordingSurface>, RecordingSurface) {
    let source = OpenWeatherSource::new(config.api_key.clone(), server.uri());
    let surface = RecordingSurface::default();
    let recorder = surface.clone();
    (WeatherLookup::new(config, Box::new(source), surface), recorder)
}

#[tokio::test]
async fn whitespace_input_issues_no_request() {
    let server = MockServer::start().await;

    // `expect(0)` fails the test on drop if any request reaches the server.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.set_api_key("TEST_KEY".to_string());
    let (widget, recorder) = widget_for(&server, config);

    widget.submit_query("   \t").await;

    let views = recorder.rendered();
    assert_eq!(views, vec![View::Failure("Please enter a city name.".to_string())]);
}

#[tokio::test]
async fn placeholder_credential_issues_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(0)
        .mount(&server)
        .await;

    let (widget, recorder) = widget_for(&server, Config::default());

    widget.submit_query("London").await;

    let views = recorder.rendered();
    assert_eq!(views.len(), 1);
    assert!(matches!(&views[0], View::Failure(msg) if msg.contains("API key")));
}

#[tokio::test]
async fn full_cycle_renders_fetching_then_reading_html() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.set_api_key("TEST_KEY".to_string());
    let (widget, recorder) = widget_for(&server, config);

    widget.submit_query(" London ").await;

    let views = recorder.rendered();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0], View::Fetching);

    let html = views[1].to_html();
    assert!(html.contains("London"));
    assert!(html.contains("Light rain"));
    assert!(html.contains("36.0 km/h"));
}

#[tokio::test]
async fn full_cycle_renders_provider_error_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.set_api_key("TEST_KEY".to_string());
    let (widget, recorder) = widget_for(&server, config);

    widget.submit_query("Nowhere").await;

    let views = recorder.rendered();
    assert_eq!(views.len(), 2);
    assert!(matches!(&views[1], View::Failure(msg) if msg.contains("city not found")));
}
