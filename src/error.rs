pub use super::int_utils::ParseINumError;
pub use super::interval::interval_error::*;
