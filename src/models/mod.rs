//! Data models

pub mod business_unit;
pub mod error_record;
pub mod kpi;
pub mod xai;

pub use business_unit::*;
pub use error_record::*;
pub use kpi::*;
pub use xai::*;
