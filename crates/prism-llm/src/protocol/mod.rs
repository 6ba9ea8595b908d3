//! Wire format types for the provider API
//!
//! Pure serde structs matching the provider's JSON format. They are only
//! used at the HTTP boundary and are not used internally.

pub mod google;
