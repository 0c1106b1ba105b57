use std::env;

use crate::query::{self, QueryParams};

pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const QUERY_STRING: &str = "QUERY_STRING";
pub const PATH_INFO: &str = "PATH_INFO";

/// The request metadata a CGI gateway hands over in environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiRequest {
    pub method: String,
    pub query_string: String,
    pub path_info: String,
}

impl Default for CgiRequest {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            query_string: String::new(),
            path_info: "/".to_string(),
        }
    }
}

impl CgiRequest {
    /// Builds a request from explicit variable pairs. Names other than the CGI
    /// metavariables used here are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (name, value) in vars {
            match name.as_ref() {
                REQUEST_METHOD => request.method = value.into(),
                QUERY_STRING => request.query_string = value.into(),
                PATH_INFO => request.path_info = value.into(),
                _ => {}
            }
        }
        request
    }

    /// Reads the request from the process environment. Unset or non-Unicode
    /// variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            [REQUEST_METHOD, QUERY_STRING, PATH_INFO]
                .into_iter()
                .filter_map(|name| env::var(name).ok().map(|value| (name, value))),
        )
    }

    #[must_use]
    pub fn params(&self) -> QueryParams {
        query::parse(&self.query_string)
    }
}
