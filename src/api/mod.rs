//! API Layer
//!
//! HTTP access to the fiscal backend.

pub mod client;

pub use client::*;
