mod provider;
pub use provider::*;
