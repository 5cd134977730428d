pub mod print;

pub use print::{format_array, write_array};
