use coursecode_lib::{Course, ParseError};
use serde::Serialize;

/// Result of parsing one input, shaped for output.
#[derive(Debug, Serialize)]
pub struct ParsedInput {
    pub input: String,
    pub course: Option<Course>,
    pub error: Option<String>,
}

impl ParsedInput {
    pub fn is_ok(&self) -> bool {
        self.course.is_some()
    }
}

impl From<(String, Result<Course, ParseError>)> for ParsedInput {
    fn from((input, result): (String, Result<Course, ParseError>)) -> Self {
        match result {
            Ok(course) => ParsedInput {
                input,
                course: Some(course),
                error: None,
            },
            Err(err) => ParsedInput {
                input,
                course: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_parse_keeps_message() {
        let input = "CS 111 2018 Autumn".to_owned();
        let result = coursecode_lib::parse(&input);
        let parsed = ParsedInput::from((input, result));

        assert!(!parsed.is_ok());
        assert_eq!(parsed.error.as_deref(), Some("`Autumn` is an invalid semester"));
    }

    #[test]
    fn serializes_course_fields() {
        let input = "CS-111 Fall 2016".to_owned();
        let result = coursecode_lib::parse(&input);
        let json = serde_json::to_value(ParsedInput::from((input, result))).unwrap();

        assert_eq!(json["course"]["department"], "CS");
        assert_eq!(json["course"]["course_number"], 111);
        assert_eq!(json["course"]["semester"], "Fall");
        assert_eq!(json["course"]["year"], 2016);
        assert!(json["error"].is_null());
    }
}
