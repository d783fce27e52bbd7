//! Theme system providing design tokens, semantic color roles and the
//! light/dark theme store.
//!
//! A [`Theme`] is a static token table (typography, spacing, radii, sizes)
//! with one palette per [`ThemeMode`]. The [`ThemeStore`] holds the active
//! mode and tells subscribers when it changes.

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod mode;
pub use mode::*;

mod schema;
pub use schema::*;

mod store;
pub use store::*;
