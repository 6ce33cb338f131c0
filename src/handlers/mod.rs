pub mod status;

pub use status::{probe, STATUS_ROUTE};
