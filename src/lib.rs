pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod docs;
pub mod model;
pub mod models;
pub mod routes;
pub mod source;
pub mod utils;

#[cfg(test)]
mod test_support;
