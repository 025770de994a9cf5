pub mod random;
pub mod serial;
