pub mod types;

pub use types::{ClientPoint, DataGroup, ElementHandle, GroupKey};
