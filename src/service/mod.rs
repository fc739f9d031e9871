pub mod lookup;

pub use lookup::{record_lookup, LookupError};
