//! Scanners for each part of a course identifier.
//!
//! Every scanner takes the unread part of the input and returns the value it read along with
//! whatever is left, so they can be chained left to right without a shared cursor. [`parse`]
//! chains them in order; they are exposed for callers that only need part of the grammar.
//!
//! [`parse`]: crate::parse

use crate::{ParseError, Semester};

const DEPARTMENT_DELIMITERS: [char; 3] = ['-', ' ', ':'];

/// Read the department from the start of `s`.
///
/// The department ends at the first delimiter (`-`, ` `, `:`) or digit. A delimiter is consumed,
/// a digit is left in place to begin the course number, so `CS111`, `CS 111`, `CS-111` and
/// `CS: 111` all read `CS`.
pub fn scan_department(s: &str) -> Result<(&str, &str), ParseError> {
    let (index, boundary) = s
        .char_indices()
        .find(|&(_, c)| DEPARTMENT_DELIMITERS.contains(&c) || c.is_ascii_digit())
        .ok_or(ParseError::MalformedDepartment)?;
    if index == 0 {
        return Err(ParseError::MalformedDepartment);
    }

    let rest = match DEPARTMENT_DELIMITERS.contains(&boundary) {
        true => &s[index + boundary.len_utf8()..],
        false => &s[index..],
    };
    log::trace!("department `{}`, rest `{rest}`", &s[..index]);

    Ok((&s[..index], rest))
}

/// Read the course number, a run of digits which must be followed by a space.
pub fn scan_course_number(s: &str) -> Result<(u32, &str), ParseError> {
    let (number, rest) = s.split_once(' ').ok_or(ParseError::MalformedInput)?;
    let invalid = || ParseError::InvalidCourseNumber {
        given: number.to_owned(),
    };
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number: u32 = number.parse().map_err(|_| invalid())?;
    log::trace!("course number {number}, rest `{rest}`");

    Ok((number, rest))
}

/// Read the term, in either `2018 Fall` or `Fall 2018` order.
///
/// The order is decided by the first character alone: a digit means the year comes first.
pub fn scan_semester_year(s: &str) -> Result<(Semester, u16), ParseError> {
    match s.chars().next() {
        Some(c) if c.is_ascii_digit() => {
            log::trace!("year-first term `{s}`");
            let (year, rest) = scan_year_prefix(s)?;
            Ok((normalize_semester(rest.trim())?, year))
        }
        Some(_) => {
            log::trace!("semester-first term `{s}`");
            let (semester, rest) = scan_semester_prefix(s)?;
            Ok((semester, normalize_year(rest)?))
        }
        None => Err(ParseError::InvalidInput),
    }
}

/// Read a leading year.
///
/// The digits end at a space, which is consumed, or at any other character, which is not (so
/// `2015S` reads 2015 and leaves `S`). Running out of input first is an error since the semester
/// is still missing.
pub fn scan_year_prefix(s: &str) -> Result<(u16, &str), ParseError> {
    let (index, stop) = s
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_digit())
        .ok_or(ParseError::InvalidInput)?;
    let year = normalize_year(&s[..index])?;

    let rest = match stop {
        ' ' => &s[index + 1..],
        _ => &s[index..],
    };
    log::trace!("year {year}, rest `{rest}`");

    Ok((year, rest))
}

/// Read a leading semester.
///
/// The name ends at a space, which is consumed, or at a digit, which is not (so `Spring2015` and
/// `S2015` both work). Running out of input first is an error since the year is still missing.
pub fn scan_semester_prefix(s: &str) -> Result<(Semester, &str), ParseError> {
    let (index, stop) = s
        .char_indices()
        .find(|&(_, c)| c == ' ' || c.is_ascii_digit())
        .ok_or(ParseError::InvalidInput)?;
    let semester = normalize_semester(&s[..index])?;

    let rest = match stop {
        ' ' => &s[index + 1..],
        _ => &s[index..],
    };
    log::trace!("semester {semester}, rest `{rest}`");

    Ok((semester, rest))
}

/// Map a semester name or abbreviation to a [`Semester`](Semester).
///
/// Matches exactly; `fall` or ` Fall` are rejected.
pub fn normalize_semester(s: &str) -> Result<Semester, ParseError> {
    Ok(match s {
        "F" | "Fall" => Semester::Fall,
        "W" | "Winter" => Semester::Winter,
        "S" | "Spring" => Semester::Spring,
        "Su" | "Summer" => Semester::Summer,
        _ => {
            return Err(ParseError::InvalidSemester {
                given: s.to_owned(),
            })
        }
    })
}

/// Turn a 2 or 4 digit token into a full year, reading `15` as 2015.
///
/// The range is not checked, `9999` is a valid year.
pub fn normalize_year(s: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidYear {
        given: s.to_owned(),
    };
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match s.len() {
        2 => s.parse::<u16>().map(|year| 2000 + year).map_err(|_| invalid()),
        4 => s.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
