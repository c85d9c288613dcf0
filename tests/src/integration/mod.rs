//! # Meridian SDK Integration Tests
//!
//! Cross-crate flows exercising meridian-types, meridian-crypto, and
//! meridian-convert together across the wire boundary.
