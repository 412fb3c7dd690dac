pub mod filter;
pub mod point;

pub use self::{filter::Filter, point::Point2};
