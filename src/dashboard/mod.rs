//! Derived dashboard feeds: expiry/leave alerts and recent activity.

pub mod activity;
pub mod alerts;
pub mod poller;
