pub mod catalogue;
pub mod config;
pub mod distribution;
pub mod error;
pub mod luck;
pub mod math;
pub mod rarity;
pub mod spin;
pub mod table;
