mod columns;
mod handles;
mod style;

pub use columns::{ClearCatcher, ColumnElement, ColumnSelection, SharedColumns};
pub use handles::HandleAllocator;
pub use style::{ElementStyle, StyleChannel};
