// src/config/mod.rs
pub mod bookmakers;
pub mod consts;
pub mod fields;

pub use bookmakers::{Bookmaker, ROSTER};
pub use consts::ClientOptions;
