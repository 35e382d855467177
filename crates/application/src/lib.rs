//! HIP-5 Application Layer
//!
//! Ports describe what the middleware needs from the root name server and
//! from protocol backends; use cases hold the interception logic.
pub mod ports;
pub mod use_cases;
