//! GPUI front end for murmur.
//!
//! The chat state itself lives in `murmur-chat`; this crate only projects it
//! through GPUI and gpui-component.
#![deny(unsafe_code)]

/// Window shell: header with the theme toggle around the chat view.
pub mod app;
/// Chat region views: transcript, composer, and their coordinator.
pub mod chat;
pub mod theme;
