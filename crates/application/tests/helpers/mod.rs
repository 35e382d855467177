pub mod fixtures;

pub use fixtures::*;
pub use mock_ports::*;
