mod auth;
pub mod client;
mod offers;
mod sessions;
#[cfg(target_arch = "wasm32")]
pub mod stream;
pub mod types;

pub use client::*;
pub use types::*;
