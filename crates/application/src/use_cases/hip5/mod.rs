pub mod hns_resolution;
pub mod lifecycle;
pub mod middleware;
pub mod referral_scanner;
pub mod response_builder;

pub use hns_resolution::HnsResolution;
pub use lifecycle::{Lifecycle, LifecycleEvent};
pub use middleware::{HandlerOutcome, Hip5Middleware};
pub use referral_scanner::{Referral, ReferralScanner};
pub use response_builder::{decode_records, ResponseBuilder};
