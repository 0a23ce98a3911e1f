#![deny(unsafe_code)]

//! Framework-free chat state for murmur.
//!
//! Everything here is plain data and synchronous transitions so the GPUI layer
//! stays a thin projection of it.

pub mod clock;
pub mod composer;
/// Event contracts shared with the view layer.
pub mod events;
pub mod message;
pub mod scroll;
pub mod session;
/// Startup configuration loading.
pub mod settings;
pub mod theme;
pub mod transcript;

pub use clock::{Clock, SystemClock};
pub use composer::Composer;
pub use events::{DraftChanged, MessageAppended, SendRequested, ThemeChanged};
pub use message::{Message, MessageId, MessageIdGenerator};
pub use scroll::{AutoScroll, ScrollStep, ScrollViewport};
pub use session::ChatSession;
pub use settings::{ChatSettings, SettingsError, SettingsStore};
pub use theme::{ThemeMode, ToggleIcon};
pub use transcript::Transcript;
