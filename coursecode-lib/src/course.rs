use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::{parser, scan, ParseError};

/// A course identifier with every field normalized.
///
/// Built by [`parse`](crate::parse) (or [`str::parse`]) from strings such as `CS111 2018 Fall`,
/// `CS-111 Fall 2016` or `Math 123 S2015`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(Serialize, Deserialize),
    serde(try_from = "CourseFields")
)]
pub struct Course {
    department: String,
    course_number: u32,
    semester: Semester,
    year: u16,
}

impl Course {
    pub(crate) fn new(
        department: String,
        course_number: u32,
        semester: Semester,
        year: u16,
    ) -> Self {
        Self {
            department,
            course_number,
            semester,
            year,
        }
    }

    /// Subject code prefix (e.g. `CS`), exactly as it appeared in the input.
    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn course_number(&self) -> u32 {
        self.course_number
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    /// Four digit year. Two digit years in the input are read as `20xx`.
    pub fn year(&self) -> u16 {
        self.year
    }
}

// Writes the canonical `CS 111 Fall 2018` form, which parses back to the same course.
impl Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {:04}",
            self.department, self.course_number, self.semester, self.year
        )
    }
}

impl FromStr for Course {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Unchecked fields of a serialized [`Course`](Course).
#[cfg(feature = "serde_support")]
#[derive(Deserialize)]
struct CourseFields {
    department: String,
    course_number: u32,
    semester: Semester,
    year: u16,
}

// Deserialized courses go back through the parser so they hold to the same rules as parsed ones.
#[cfg(feature = "serde_support")]
impl TryFrom<CourseFields> for Course {
    type Error = ParseError;

    fn try_from(fields: CourseFields) -> Result<Self, Self::Error> {
        let course = Course::new(
            fields.department,
            fields.course_number,
            fields.semester,
            fields.year,
        );
        match parser::parse(&course.to_string())? == course {
            true => Ok(course),
            // Only a department holding a delimiter (e.g. `CS:`) reads back as something else.
            false => Err(ParseError::MalformedDepartment),
        }
    }
}

/// An academic term.
///
/// Accepted in the input either by full name (`Fall`) or by abbreviation (`F`). Matching is
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Semester {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// Every semester in calendar order.
    pub const ALL: [Semester; 4] = [
        Semester::Winter,
        Semester::Spring,
        Semester::Summer,
        Semester::Fall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Semester::Winter => "Winter",
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
            Semester::Fall => "Fall",
        }
    }

    /// Short form accepted by the parser, e.g. `Su` for [`Semester::Summer`].
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Semester::Winter => "W",
            Semester::Spring => "S",
            Semester::Summer => "Su",
            Semester::Fall => "F",
        }
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Semester {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan::normalize_semester(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        let course = Course::new("CS".to_owned(), 111, Semester::Fall, 2018);
        assert_eq!(course.to_string(), "CS 111 Fall 2018");
    }

    #[test]
    fn display_pads_year() {
        let course = parser::parse("CS 111 Fall 0015").unwrap();
        assert_eq!(course.year(), 15);
        assert_eq!(course.to_string(), "CS 111 Fall 0015");
        assert_eq!(parser::parse(&course.to_string()), Ok(course));

        let course = parser::parse("CS 111 0999 F").unwrap();
        assert_eq!(course.to_string(), "CS 111 Fall 0999");
        assert_eq!(parser::parse(&course.to_string()), Ok(course));
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn deserialize_rejects_invalid_fields() {
        let empty_department = r#"{"department":"","course_number":1,"semester":"Fall","year":7}"#;
        assert!(serde_json::from_str::<Course>(empty_department).is_err());

        let long_year = r#"{"department":"CS","course_number":1,"semester":"Fall","year":12345}"#;
        assert!(serde_json::from_str::<Course>(long_year).is_err());

        let joined = r#"{"department":"CS 1","course_number":1,"semester":"Fall","year":2018}"#;
        assert!(serde_json::from_str::<Course>(joined).is_err());

        let delimited = r#"{"department":"CS:","course_number":1,"semester":"Fall","year":2018}"#;
        assert!(serde_json::from_str::<Course>(delimited).is_err());
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn deserialize_accepts_serialized_course() {
        let course = parser::parse("CS-111 Fall 2016").unwrap();
        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(serde_json::from_str::<Course>(&json).unwrap(), course);
    }

    #[test]
    fn names_and_abbreviations_parse_back() {
        for semester in Semester::ALL {
            assert_eq!(semester.name().parse::<Semester>(), Ok(semester));
            assert_eq!(semester.abbreviation().parse::<Semester>(), Ok(semester));
        }
    }

    #[test]
    fn semester_order_follows_calendar() {
        assert!(Semester::Winter < Semester::Spring);
        assert!(Semester::Summer < Semester::Fall);
    }
}
