//! Mindspace: a mental-wellness companion service.
//!
//! The core is a deterministic check-in classifier ([`assessment`]) that
//! maps a 12-question answer set to a support category with pre-authored
//! guidance and a metaphor seed. Around it sit a story generator and a
//! chat companion over a hosted text model ([`story`], [`chat`], [`llm`]),
//! a profile and check-in store ([`store`]), a static content catalog
//! ([`content`]), and an authenticated HTTP gateway ([`gateway`]).

pub mod assessment;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod store;
pub mod story;

pub use config::Config;
pub use error::{Error, Result};
