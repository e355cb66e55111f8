pub mod api;
pub mod errors;
pub mod layout;
pub mod scaffold;
pub mod tree;

pub use api::{run, SetupError};
