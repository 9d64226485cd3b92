//! Sequential playlist save/delete runs against the web UI.
//!
//! - `form` - save/delete request payloads
//! - `host` - transport and run log seams (`PlaylistHost`, `LogSink`)
//! - `throttle` - pacing between requests
//! - `driver` - the one-request-at-a-time run loop

mod driver;
mod form;
mod host;
mod throttle;

pub use driver::*;
pub use form::*;
pub use host::*;
pub use throttle::*;
