//! 命令行输出

mod printer;

pub use printer::{format_weight, PrintMode, Printer};
