mod helpers;
mod minor_units;
mod secret;

pub use helpers::parse_boolean_flag;
pub use minor_units::MinorUnits;
pub use secret::Secret;
