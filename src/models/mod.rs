pub mod error;
pub mod prices;
pub mod region;
