use tracing::debug;

use crate::error::Result;
use crate::network::HttpClient;
use crate::sync::{PlaylistForm, PlaylistHost};

/// Playlists page of a CG web UI, addressed by its URL
pub struct CgPlaylistPage {
    client: HttpClient,
    page_url: String,
}

impl CgPlaylistPage {
    pub fn new(page_url: impl Into<String>, client: HttpClient) -> Self {
        Self {
            client,
            page_url: page_url.into(),
        }
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}

impl PlaylistHost for CgPlaylistPage {
    fn send(&mut self, form: &PlaylistForm) -> Result<()> {
        let body = self.client.post_form(&self.page_url, &form.fields())?;
        debug!(
            "{} slot {}: {} byte response",
            form.action.as_str(),
            form.index,
            body.len()
        );
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let body = self.client.get(&self.page_url)?;
        debug!("Reloaded {} ({} bytes)", self.page_url, body.len());
        Ok(())
    }
}
