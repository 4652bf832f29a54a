//! Client-side logic for the Secure Buddy dashboard.
//!
//! Everything that touches the browser (storage, location, the network) is
//! reached through a trait so the same code runs in the wasm front-end and in
//! native tests.

#![allow(async_fn_in_trait)]

pub mod api;
pub mod api_base;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod modules;
pub mod observe;
pub mod session;
pub mod shell;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
