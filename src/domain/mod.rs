pub mod coin;
pub mod currency;
pub mod ports;
pub mod visitor;
