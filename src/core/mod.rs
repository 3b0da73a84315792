//! Core components of the `yfinance-lite` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`], its builder, and the cookie/crumb [`Session`].
//! - The [`RequestSigner`] that attaches credentials and a client identity.
//! - The primary [`YfError`] type.
//! - Shared data models like [`QuotedValue`] and [`PriceBar`].

/// The main client (`YfClient`), builder, session and request signing.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;
pub(crate) mod net;
pub(crate) mod quotesummary;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{
    AgentPicker, AuthStatus, Cookie, FixedPicker, RandomPicker, RequestSigner, Session,
    SignedRequest, YfClient, YfClientBuilder,
};
pub use error::YfError;
pub use models::{Interval, PriceBar, QuotedValue, Range};
