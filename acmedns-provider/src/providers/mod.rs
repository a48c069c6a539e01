mod acmedns;

pub use acmedns::{ACMEDNS_API_BASE, AcmeDnsProvider};
