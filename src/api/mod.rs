pub mod activity;
pub mod notifications;
pub mod records;
