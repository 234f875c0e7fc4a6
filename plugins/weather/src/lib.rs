//! Mock weather lookup.
//!
//! [`lookup`] maps a city name to a canned report from a fixed table.
//! Matching ignores case and whitespace. Unknown cities are not an error
//! in the Rust sense: they produce a record with [`Status::Error`] that
//! callers (and models) must check.
//!
//! The module also exposes the lookup as the `get_weather` tool.

use runtime::Runtime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wcore::model::{Registry, Tool};

/// Tool name under which the lookup is registered.
pub const TOOL_NAME: &str = "get_weather";

/// Known cities, keyed by normalized name.
const REPORTS: &[(&str, &str)] = &[
    (
        "newyork",
        "The weather in New York is sunny with a temperature of 25°C.",
    ),
    ("london", "It's cloudy in London with a temperature of 15°C."),
    (
        "tokyo",
        "Tokyo is experiencing light rain and a temperature of 18°C.",
    ),
    (
        "chicago",
        "The weather in Chicago is sunny with a temperature of 25°C.",
    ),
    (
        "toronto",
        "It's partly cloudy in Toronto with a temperature of 30°C.",
    ),
    ("chennai", "It's rainy in Chennai with a temperature of 15°C."),
];

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The city was found.
    Success,
    /// The city is not in the table.
    Error,
}

/// A weather report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Whether the lookup found the city.
    pub status: Status,
    /// Human-readable report (or the reason there is none).
    pub report: String,
}

impl WeatherRecord {
    /// Whether this record carries a report.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Look up the weather for a city.
pub fn lookup(city: &str) -> WeatherRecord {
    tracing::debug!("get_weather called for city: {city}");
    let key = normalize(city);
    match REPORTS.iter().find(|(k, _)| *k == key) {
        Some((_, report)) => WeatherRecord {
            status: Status::Success,
            report: (*report).to_owned(),
        },
        None => WeatherRecord {
            status: Status::Error,
            report: format!("Sorry, I don't have weather information for '{city}'."),
        },
    }
}

/// Lower-case and drop all whitespace.
pub fn normalize(city: &str) -> String {
    city.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Arguments of the `get_weather` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WeatherInput {
    /// Name of the city, e.g. "New York".
    pub city: String,
}

/// The `get_weather` tool definition.
pub fn tool() -> Tool {
    Tool {
        name: TOOL_NAME.into(),
        description: "Retrieves the current weather report for a specified city.".into(),
        parameters: schemars::schema_for!(WeatherInput),
        strict: true,
    }
}

/// Handle a `get_weather` tool call with JSON arguments.
pub fn handle(arguments: &str) -> String {
    let input: WeatherInput = match serde_json::from_str(arguments) {
        Ok(input) => input,
        Err(e) => return format!("invalid arguments: {e}"),
    };
    let record = lookup(&input.city);
    serde_json::to_string(&record).unwrap_or_else(|e| format!("weather error: {e}"))
}

/// Register the `get_weather` tool on a runtime.
pub fn register<R: Registry>(runtime: &mut Runtime<R>) {
    runtime.register(tool(), |args| async move { handle(&args) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize(" New\tYork \n"), "newyork");
    }

    #[test]
    fn table_keys_are_normalized() {
        for (key, _) in REPORTS {
            assert_eq!(normalize(key), *key);
        }
    }
}
