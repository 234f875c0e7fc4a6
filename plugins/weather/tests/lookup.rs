//! Tests for the weather lookup and its tool wrapper.

use warren_weather::{Status, WeatherRecord, handle, lookup, tool};

#[test]
fn new_york_matches() {
    assert_eq!(
        lookup("New York"),
        WeatherRecord {
            status: Status::Success,
            report: "The weather in New York is sunny with a temperature of 25°C.".into(),
        }
    );
}

#[test]
fn padded_chennai_matches() {
    let record = lookup("  chennai ");
    assert!(record.is_success());
    assert_eq!(
        record.report,
        "It's rainy in Chennai with a temperature of 15°C."
    );
}

#[test]
fn case_and_space_insensitive() {
    for city in ["TOKYO", "tokyo", " To kyo", "tOkYo  "] {
        let record = lookup(city);
        assert_eq!(
            record.report, "Tokyo is experiencing light rain and a temperature of 18°C.",
            "city: {city:?}"
        );
    }
}

#[test]
fn every_known_city() {
    let cases = [
        ("London", "It's cloudy in London with a temperature of 15°C."),
        (
            "Chicago",
            "The weather in Chicago is sunny with a temperature of 25°C.",
        ),
        (
            "Toronto",
            "It's partly cloudy in Toronto with a temperature of 30°C.",
        ),
    ];
    for (city, report) in cases {
        let record = lookup(city);
        assert_eq!(record.status, Status::Success);
        assert_eq!(record.report, report);
    }
}

#[test]
fn unknown_city_quotes_original_input() {
    assert_eq!(
        lookup("Atlantis"),
        WeatherRecord {
            status: Status::Error,
            report: "Sorry, I don't have weather information for 'Atlantis'.".into(),
        }
    );
    let record = lookup("  Mos cow ");
    assert_eq!(
        record.report,
        "Sorry, I don't have weather information for '  Mos cow '."
    );
}

#[test]
fn lookup_is_deterministic() {
    for city in ["London", "Atlantis", ""] {
        assert_eq!(lookup(city), lookup(city));
    }
}

#[test]
fn record_serializes_lowercase_status() {
    let json = serde_json::to_value(lookup("London")).unwrap();
    assert_eq!(json["status"], "success");
    let json = serde_json::to_value(lookup("Nowhere")).unwrap();
    assert_eq!(json["status"], "error");
}

#[test]
fn tool_schema_mentions_city() {
    let t = tool();
    assert_eq!(t.name, "get_weather");
    let json = serde_json::to_string(&t.parameters).unwrap();
    assert!(json.contains("city"));
}

#[test]
fn handle_returns_record_json() {
    let out = handle(r#"{"city": "new york"}"#);
    let record: WeatherRecord = serde_json::from_str(&out).unwrap();
    assert!(record.is_success());
}

#[test]
fn handle_rejects_bad_arguments() {
    assert!(handle("not json").starts_with("invalid arguments"));
    assert!(handle(r#"{"town": "London"}"#).starts_with("invalid arguments"));
}

#[tokio::test]
async fn registered_tool_dispatches() {
    use runtime::Runtime;
    use wcore::model::{General, NoopRegistry, ToolCall};

    let mut runtime = Runtime::new(General::default(), NoopRegistry);
    warren_weather::register(&mut runtime);
    assert!(runtime.has_tool("get_weather"));

    let call = ToolCall::function("call_1", "get_weather", r#"{"city": "Tokyo"}"#);
    let results = runtime.dispatch(&[call]).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tool_call_id, "call_1");
    assert!(results[0].content.contains("light rain"));
}
