//! Networking for matcha-os: the outbound text-generation collaborator.
//!
//! The shell only ever sees the [`TextGenService`] trait and the
//! [`ReplyRx`] polling handle; the HTTPS transport and the REST wire
//! format live behind them.

pub mod genai;
pub mod http;
mod textgen;

pub use genai::GenAiClient;
pub use textgen::{ReplyRx, TextGenService, spawn_generate};
