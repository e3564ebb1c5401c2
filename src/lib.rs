pub mod assemble;
pub mod bundle;
pub mod catalog;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http_cache;
pub mod http_client;
pub mod index;
pub mod logging;
pub mod model;
pub mod overrides;
pub mod roster;
pub mod schedule;
pub mod stats;
pub mod team;
pub mod value;
