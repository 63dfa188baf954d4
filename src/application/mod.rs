// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`validation`]: URL validation performed before any encode
//! - [`request`]: Sequence guard for asynchronous encode requests
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_qr::application::port::QrEncoder;
//! use iced_qr::application::validation::validate_url;
//!
//! // Infrastructure implements the port trait
//! struct MyEncoder { /* ... */ }
//! impl QrEncoder for MyEncoder { /* ... */ }
//!
//! let url = validate_url("https://example.com")?;
//! ```

pub mod port;
pub mod request;
pub mod validation;
