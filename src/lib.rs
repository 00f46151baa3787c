pub mod common;

#[cfg(not(feature = "server"))]
mod client;

#[cfg(not(feature = "server"))]
pub use client::run_app;

#[cfg(feature = "server")]
mod server;

#[cfg(feature = "server")]
pub use server::{run as serve, ServerError};
