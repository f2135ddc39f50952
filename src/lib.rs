pub mod theme;

pub use theme::{ClassGroup, ClassList, ClassTable, InputType, Region};
