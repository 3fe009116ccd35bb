pub mod admin;
pub mod entry;
pub mod oracle;
pub mod upkeep;
pub mod views;
