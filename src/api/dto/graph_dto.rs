use serde::Deserialize;

/// Query string of the single-metric graph endpoint.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct GraphTimeQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
