pub mod markers;
pub mod report;
pub mod request;

pub use markers::*;
pub use report::*;
pub use request::*;
