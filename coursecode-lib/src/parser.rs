use thiserror::Error;

use crate::{scan, Course};

/// Parse a free-form course identifier into a [`Course`](Course).
///
/// The input is a department, a course number and a term, where the term is either a year
/// followed by a semester or a semester followed by a year:
///
/// ```
/// use coursecode_lib::{parse, Semester};
///
/// let course = parse(" Math 123 S2015")?;
/// assert_eq!(course.department(), "Math");
/// assert_eq!(course.course_number(), 123);
/// assert_eq!(course.semester(), Semester::Spring);
/// assert_eq!(course.year(), 2015);
/// # Ok::<(), coursecode_lib::ParseError>(())
/// ```
///
/// Parsing fails fast on the first violated expectation and never returns a partial course.
pub fn parse(input: &str) -> Result<Course, ParseError> {
    parse_inner(input).inspect_err(|err| log::debug!("rejected course `{input}`: {err}"))
}

fn parse_inner(input: &str) -> Result<Course, ParseError> {
    let input = non_empty(input.trim())?;

    let (department, rest) = scan::scan_department(input)?;
    let (course_number, rest) = scan::scan_course_number(non_empty(rest.trim_start())?)?;
    let (semester, year) = scan::scan_semester_year(non_empty(rest.trim_start())?)?;

    Ok(Course::new(
        department.to_owned(),
        course_number,
        semester,
        year,
    ))
}

fn non_empty(s: &str) -> Result<&str, ParseError> {
    match s.is_empty() {
        true => Err(ParseError::InvalidInput),
        false => Ok(s),
    }
}

/// Error when parsing a course identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is empty, or ended before every part of the course was read.
    #[error("course input is empty or ends unexpectedly")]
    InvalidInput,
    /// No delimiter (`-`, ` `, `:`) or digit marks the end of the department, or the
    /// department is empty.
    #[error("could not find the end of the department")]
    MalformedDepartment,
    /// No space follows the course number.
    #[error("expected a space after the course number")]
    MalformedInput,
    /// Course number is not a run of digits that fits a `u32`.
    #[error("`{given}` is an invalid course number")]
    InvalidCourseNumber { given: String },
    /// Semester is neither a full name (`Fall`) nor an abbreviation (`F`).
    #[error("`{given}` is an invalid semester")]
    InvalidSemester { given: String },
    /// Year is not made of exactly 2 or 4 digits.
    #[error("`{given}` is an invalid year")]
    InvalidYear { given: String },
}
