pub mod api;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
pub mod external;
pub mod map;
pub mod server;

#[cfg(test)]
mod testing;
