//! Turning grader replies into numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::GradeParseError;

/// A number at the very start of the reply (`85`, `85.5/100`, `-3`, `.5`,
/// `8.5e1`).
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// The first unsigned number anywhere in the reply.
static EMBEDDED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

/// Parse a grade reply: leading number first, then the first embedded
/// number. The result is clamped to `[0, 100]`.
///
/// # Errors
///
/// Returns [`GradeParseError`] when the reply is blank or has no digits.
pub fn parse_grade(reply: &str) -> Result<f64, GradeParseError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(GradeParseError::Empty);
    }
    let number = LEADING_NUMBER
        .find(trimmed)
        .or_else(|| EMBEDDED_NUMBER.find(trimmed))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| GradeParseError::NoNumber(trimmed.to_string()))?;
    Ok(number.clamp(0.0, 100.0))
}

/// Collapse a parse failure to a zero score.
///
/// This is the only place an unparseable grade is forgiven.
#[must_use]
pub fn score_or_zero(parsed: Result<f64, GradeParseError>) -> f64 {
    parsed.unwrap_or_else(|err| {
        tracing::warn!(%err, "unparseable grade, scoring 0");
        0.0
    })
}

/// Split a comma-separated synonym reply.
#[must_use]
pub fn parse_synonyms(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rounded arithmetic mean, or `None` for no scores.
#[must_use]
pub fn aggregate(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Some(mean.round())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("85", 85.0)]
    #[case("  92.5\n", 92.5)]
    #[case("The grade is 85.", 85.0)]
    #[case("78/100", 78.0)]
    #[case("Grade: 88 (out of 100)", 88.0)]
    #[case("140", 100.0)]
    #[case("-12", 0.0)]
    #[case("1e2", 100.0)]
    #[case("8.5e1", 85.0)]
    #[case("5E-1", 0.5)]
    #[case("85e", 85.0)]
    fn parses_grades(#[case] reply: &str, #[case] expected: f64) {
        assert_eq!(parse_grade(reply), Ok(expected));
    }

    #[test]
    fn reply_without_number_is_an_error() {
        assert_eq!(
            parse_grade("excellent"),
            Err(GradeParseError::NoNumber("excellent".into()))
        );
        assert_eq!(parse_grade("   "), Err(GradeParseError::Empty));
    }

    #[test]
    fn parse_failures_score_zero() {
        assert_eq!(score_or_zero(parse_grade("excellent")), 0.0);
        assert_eq!(score_or_zero(parse_grade("The grade is 85.")), 85.0);
    }

    #[test]
    fn aggregate_is_rounded_mean() {
        assert_eq!(aggregate(&[90.0, 50.0, 70.0]), Some(70.0));
        assert_eq!(aggregate(&[80.0, 81.0]), Some(81.0));
        assert_eq!(aggregate(&[0.0, 0.0, 1.0]), Some(0.0));
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn synonyms_are_trimmed_and_nonempty() {
        assert_eq!(
            parse_synonyms(" bright, vivid ,, radiant,"),
            vec!["bright", "vivid", "radiant"]
        );
        assert!(parse_synonyms("").is_empty());
    }
}
