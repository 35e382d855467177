pub mod hip5;

pub use hip5::{
    HandlerOutcome, HnsResolution, Hip5Middleware, Lifecycle, LifecycleEvent,
    ReferralScanner, ResponseBuilder,
};
