mod client;
mod page;

pub use client::HttpClient;
pub use page::CgPlaylistPage;
