//! iced front end for the Marquee testimonials carousel.
//!
//! The binary in `main.rs` only sets up logging and configuration; everything
//! else is exposed here so the update routing and view construction can be
//! exercised from integration tests without opening a window.

pub mod app;
pub mod constants;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;

pub use messages::{KeyCommand, Message};
pub use state::State;
