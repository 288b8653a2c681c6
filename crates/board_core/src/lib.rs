pub mod board;
pub mod controller;
pub mod error;
pub mod types;

pub use board::*;
pub use controller::*;
pub use error::*;
pub use types::*;
