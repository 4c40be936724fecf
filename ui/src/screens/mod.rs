// Page containers. Each screen owns its data and fetches on mount.

pub mod chain;
pub mod dashboard;
pub mod token;
pub mod wallet;
