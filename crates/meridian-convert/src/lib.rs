//! # Meridian Convert - Wire/Domain Conversion
//!
//! The boundary between access-node wire messages and domain entities.
//!
//! ## Design Principles
//!
//! - **Validate at the gate**: key bytes and algorithm codes are checked
//!   here, so domain objects are valid by construction.
//! - **Explicit absence**: operations that need a non-trivial object take
//!   `Option<&Msg>` and fail with [`ConvertError::EmptyMessage`] on
//!   `None`; a missing message never turns into a zero-valued entity.
//! - **Fail fast**: the first bad element in a collection aborts the
//!   whole conversion; no partially converted results.

pub mod convert;
pub mod errors;
pub mod wire;

pub use convert::*;
pub use errors::ConvertError;
