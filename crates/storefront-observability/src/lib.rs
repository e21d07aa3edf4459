//! Structured logging for storefront sessions.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one shopping session
//! - `StructuredLogger` - JSON or human-readable log lines with session context
//! - `cart_logger` - A cart observer that logs each applied change

mod cart;
mod logging;
mod session;

pub use cart::cart_logger;
pub use logging::*;
pub use session::SessionId;
