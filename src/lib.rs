pub mod client;
pub mod pb;
pub mod readiness;
