use std::path::PathBuf;
use thiserror::Error;

pub const ID_PLACEHOLDER: &str = "{id}";

/// Largest number of ids a single `a-b` range may expand to.
pub const MAX_RANGE_LEN: u64 = 100_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Instance id list is empty.")]
    Empty,

    #[error("Empty entry in instance id list '{0}'.")]
    EmptyEntry(String),

    #[error("Invalid id range '{0}'. Expected 'start-end' with start <= end (e.g., '1-78').")]
    InvalidRange(String),

    #[error("Id range '{0}' is too long. At most {max} ids per range are allowed.", max = MAX_RANGE_LEN)]
    RangeTooLong(String),

    #[error("Template '{0}' has no '{{id}}' placeholder, so every instance would share one file.")]
    MissingPlaceholder(String),
}

/// Expands an id list into individual ids, in order.
///
/// Comma-separated entries are either numeric ranges `a-b` (inclusive) or literal ids.
pub fn parse_ids(spec: &str) -> Result<Vec<String>, ParseError> {
    if spec.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let mut ids = Vec::new();
    for entry in spec.split(',').map(str::trim) {
        if entry.is_empty() {
            return Err(ParseError::EmptyEntry(spec.to_string()));
        }
        match parse_range(entry)? {
            Some((start, end)) => ids.extend((start..=end).map(|n| n.to_string())),
            None => ids.push(entry.to_string()),
        }
    }
    Ok(ids)
}

fn parse_range(entry: &str) -> Result<Option<(u64, u64)>, ParseError> {
    let Some((lo, hi)) = entry.split_once('-') else {
        return Ok(None);
    };
    let is_numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_numeric(lo) && !is_numeric(hi) {
        // A literal name such as "lambda-man".
        return Ok(None);
    }
    let invalid = || ParseError::InvalidRange(entry.to_string());
    let start: u64 = lo.parse().map_err(|_| invalid())?;
    let end: u64 = hi.parse().map_err(|_| invalid())?;
    if start > end {
        return Err(invalid());
    }
    if end - start >= MAX_RANGE_LEN {
        return Err(ParseError::RangeTooLong(entry.to_string()));
    }
    Ok(Some((start, end)))
}

pub fn expand_template(template: &str, id: &str) -> PathBuf {
    PathBuf::from(template.replace(ID_PLACEHOLDER, id))
}

/// Rejects output templates that would make every instance overwrite the same file.
pub fn require_placeholder(template: &str, instance_count: usize) -> Result<(), ParseError> {
    if instance_count > 1 && !template.contains(ID_PLACEHOLDER) {
        return Err(ParseError::MissingPlaceholder(template.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_inclusive() {
        assert_eq!(parse_ids("1-3").unwrap(), vec!["1", "2", "3"]);
        assert_eq!(parse_ids("1-78").unwrap().len(), 78);
    }

    #[test]
    fn lists_mix_ranges_and_literals() {
        assert_eq!(
            parse_ids("3, 5-6,spaceship").unwrap(),
            vec!["3", "5", "6", "spaceship"]
        );
    }

    #[test]
    fn hyphenated_names_stay_literal() {
        assert_eq!(parse_ids("lambda-man").unwrap(), vec!["lambda-man"]);
    }

    #[test]
    fn malformed_lists_are_rejected() {
        assert_eq!(parse_ids("  "), Err(ParseError::Empty));
        assert_eq!(
            parse_ids("1,,2"),
            Err(ParseError::EmptyEntry("1,,2".to_string()))
        );
        assert_eq!(
            parse_ids("9-2"),
            Err(ParseError::InvalidRange("9-2".to_string()))
        );
        assert_eq!(
            parse_ids("4-x"),
            Err(ParseError::InvalidRange("4-x".to_string()))
        );
    }

    #[test]
    fn oversized_ranges_are_rejected_before_expansion() {
        let huge = format!("1-{}", u64::MAX);
        assert_eq!(parse_ids(&huge), Err(ParseError::RangeTooLong(huge.clone())));
        assert_eq!(
            parse_ids("0-100000"),
            Err(ParseError::RangeTooLong("0-100000".to_string()))
        );
        assert_eq!(parse_ids("1-100000").unwrap().len(), 100_000);
    }

    #[test]
    fn template_substitutes_every_placeholder() {
        assert_eq!(
            expand_template("out/{id}/img_{id}.svg", "7"),
            PathBuf::from("out/7/img_7.svg")
        );
    }

    #[test]
    fn shared_output_is_only_allowed_for_one_instance() {
        assert!(require_placeholder("out.svg", 1).is_ok());
        assert_eq!(
            require_placeholder("out.svg", 2),
            Err(ParseError::MissingPlaceholder("out.svg".to_string()))
        );
        assert!(require_placeholder("img_{id}.svg", 2).is_ok());
    }
}
