//! # gallery-core - Core Domain Types
//!
//! Foundation crate for Photo Gallery. Provides the item/collection model,
//! ordering primitives, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Collections (`collection`)
//! - [`Item`] - A single media record with date, location, file, and grouping fields
//! - [`Collection`] - Named item list plus its valid grouping keys
//!
//! ### Ordering (`types`)
//! - [`Direction`] - Ascending/descending axis
//! - [`OrderKey`] - The date key or a named grouping key
//! - [`SortSpec`] - The ordering currently applied to a view
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gallery_core::prelude::*;
//! ```

pub mod collection;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Photo Gallery crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use collection::{parse_timestamp_millis, Collection, Item, UNKNOWN_GROUP_VALUE};
pub use error::{Error, Result, ResultExt};
pub use types::{Direction, OrderKey, SortSpec, DATE_KEY};
