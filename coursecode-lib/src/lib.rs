//! Parse free-form course identifiers such as `CS111 2018 Fall`, `CS-111 Fall 2016` or
//! `Math 123 S2015` into a normalized [`Course`](Course).

mod course;
mod parser;
pub mod scan;

pub use course::{Course, Semester};
pub use parser::{parse, ParseError};
pub use scan::{normalize_semester, normalize_year};
