use std::time::Duration;

use crate::config::http::TIMEOUT_SECS;
use crate::error::Result;

/// Blocking HTTP client with an optional session cookie
#[derive(Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    cookie: Option<String>,
}

impl HttpClient {
    pub fn new(cookie: Option<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(TIMEOUT_SECS)))
            .build();

        Self {
            agent: config.into(),
            cookie,
        }
    }

    /// Form-encoded POST, as the web UI's own XHR does it
    pub fn post_form(&self, url: &str, fields: &[(&str, String)]) -> Result<String> {
        let mut request = self
            .agent
            .post(url)
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(cookie) = &self.cookie {
            request = request.header("Cookie", cookie);
        }

        let mut response = request.send_form(fields.iter().map(|(k, v)| (*k, v.as_str())))?;
        Ok(response.body_mut().read_to_string()?)
    }

    pub fn get(&self, url: &str) -> Result<String> {
        let mut request = self.agent.get(url);
        if let Some(cookie) = &self.cookie {
            request = request.header("Cookie", cookie);
        }

        let mut response = request.call()?;
        Ok(response.body_mut().read_to_string()?)
    }
}
