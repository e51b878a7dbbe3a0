//! scripted stand-ins for the Overpass API used by unit tests.

use super::{FetchError, OverpassTransport};
use crate::config::RoadDataConfiguration;
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    time::Duration,
};

/// replays canned results per endpoint and records every call. an endpoint
/// with no remaining script fails with a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: RefCell<HashMap<String, VecDeque<Result<String, FetchError>>>>,
    pub calls: RefCell<Vec<String>>,
    pub queries: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn respond(self, endpoint: &str, result: Result<String, FetchError>) -> Self {
        self.scripts
            .borrow_mut()
            .entry(String::from(endpoint))
            .or_default()
            .push_back(result);
        self
    }

    pub fn fail(self, endpoint: &str, times: usize) -> Self {
        (0..times).fold(self, |t, _| {
            t.respond(
                endpoint,
                Err(FetchError::HttpStatus {
                    endpoint: String::from(endpoint),
                    status: 504,
                }),
            )
        })
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == endpoint).count()
    }
}

impl OverpassTransport for ScriptedTransport {
    fn post_query(&self, endpoint: &str, query: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(String::from(endpoint));
        self.queries.borrow_mut().push(String::from(query));
        self.scripts
            .borrow_mut()
            .get_mut(endpoint)
            .and_then(|q| q.pop_front())
            .unwrap_or_else(|| {
                Err(FetchError::Transport {
                    endpoint: String::from(endpoint),
                    message: String::from("connection refused"),
                })
            })
    }
}

pub const SERVER_A: &str = "https://a.example.org/api/interpreter";
pub const SERVER_B: &str = "https://b.example.org/api/interpreter";
pub const SERVER_C: &str = "https://c.example.org/api/interpreter";

pub fn test_configuration() -> RoadDataConfiguration {
    RoadDataConfiguration {
        overpass_servers: vec![
            String::from(SERVER_A),
            String::from(SERVER_B),
            String::from(SERVER_C),
        ],
        retry_delay: Duration::ZERO,
        jurisdiction_delay: Duration::ZERO,
        ..Default::default()
    }
}

pub fn two_way_body() -> String {
    serde_json::json!({
        "elements": [
            {
                "type": "way",
                "id": 1001,
                "tags": { "highway": "motorway", "ref": "I 64" },
                "geometry": [{ "lat": 37.55, "lon": -77.60 }, { "lat": 37.56, "lon": -77.55 }]
            },
            {
                "type": "way",
                "id": 1002,
                "tags": { "highway": "residential" },
                "geometry": [{ "lat": 37.60, "lon": -77.40 }, { "lat": 37.601, "lon": -77.401 }]
            }
        ]
    })
    .to_string()
}

