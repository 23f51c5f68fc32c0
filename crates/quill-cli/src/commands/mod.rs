//! Command implementations.

pub mod draft;
pub mod export;
pub mod extract;
pub mod profile;

pub use self::draft::execute_draft;
pub use self::export::execute_export;
pub use self::extract::execute_extract;
pub use self::profile::execute_profile;
