use crate::error::Result;
use crate::sync::PlaylistForm;

/// The playlists page a run writes to
pub trait PlaylistHost {
    /// Submit one save/delete form and wait for the response
    fn send(&mut self, form: &PlaylistForm) -> Result<()>;

    /// Refresh the page after a fully successful run
    fn reload(&mut self) -> Result<()>;
}

/// Ordered, user-visible transcript of a run
pub trait LogSink {
    fn append(&mut self, message: &str);
}

impl LogSink for Vec<String> {
    fn append(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
