pub mod config;
pub mod fuzzy;
pub mod geo;
pub mod qr;
pub mod state;
