pub mod state;

pub use state::{SessionEvent, SessionState};
