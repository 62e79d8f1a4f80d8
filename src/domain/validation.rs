//! Input validation for project creation
//!
//! A declarative rule set evaluated one field at a time. Text fields check
//! emptiness and length, numeric fields check an inclusive range; each
//! bound applies only when it is set, and a bound that is set applies even
//! when it is zero.

use serde::{Deserialize, Serialize};

/// A single input value under validation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, as typed
    Text(String),
    /// A numeric count
    Number(i64),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

/// Declarative constraints for one field
///
/// Length bounds apply to text values only, numeric bounds to numbers
/// only; a rule carrying both kinds still checks only the ones matching
/// the value's type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRule {
    /// Reject empty text; numbers always satisfy this
    pub required: bool,
    /// Minimum text length in characters, inclusive
    pub min_length: Option<usize>,
    /// Maximum text length in characters, inclusive
    pub max_length: Option<usize>,
    /// Minimum numeric value, inclusive
    pub min: Option<i64>,
    /// Maximum numeric value, inclusive
    pub max: Option<i64>,
}

/// Evaluate a value against a rule
///
/// Checks are independent; the value passes only if every applicable one
/// does. `required` tests textual emptiness, so a numeric zero satisfies
/// it and only the range bounds can reject it.
pub fn validate(value: &FieldValue, rule: &ValidationRule) -> bool {
    let mut valid = true;

    if rule.required {
        let present = match value {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Number(_) => true,
        };
        valid = valid && present;
    }

    if let FieldValue::Text(text) = value {
        let length = text.chars().count();
        if let Some(min_length) = rule.min_length {
            valid = valid && length >= min_length;
        }
        if let Some(max_length) = rule.max_length {
            valid = valid && length <= max_length;
        }
    }

    if let FieldValue::Number(number) = value {
        if let Some(min) = rule.min {
            valid = valid && *number >= min;
        }
        if let Some(max) = rule.max {
            valid = valid && *number <= max;
        }
    }

    valid
}

/// Constants behind the per-field creation rules
///
/// The defaults are the board's stock rules; a config file may override
/// any of them independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationRules {
    /// Minimum description length in characters
    #[serde(default = "default_description_min_length")]
    pub description_min_length: usize,

    /// Smallest accepted people count
    #[serde(default = "default_people_min")]
    pub people_min: i64,

    /// Largest accepted people count
    #[serde(default = "default_people_max")]
    pub people_max: i64,
}

fn default_description_min_length() -> usize {
    5
}

fn default_people_min() -> i64 {
    1
}

fn default_people_max() -> i64 {
    5
}

impl Default for CreationRules {
    fn default() -> Self {
        CreationRules {
            description_min_length: default_description_min_length(),
            people_min: default_people_min(),
            people_max: default_people_max(),
        }
    }
}

/// Candidate input for a new project, before it reaches the store
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: i64,
}

impl ProjectDraft {
    /// Build a draft from raw form input
    ///
    /// Text fields are trimmed. The people field is parsed as an integer;
    /// empty or unparsable input coerces to 0 so the minimum-count rule
    /// rejects it rather than the parse step erroring out.
    pub fn from_raw(title: &str, description: &str, people: &str) -> Self {
        ProjectDraft {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            people: people.trim().parse::<i64>().unwrap_or(0),
        }
    }
}

/// Rule for the title field: any non-empty text
pub fn title_rule() -> ValidationRule {
    ValidationRule {
        required: true,
        ..Default::default()
    }
}

/// Rule for the description field: non-empty with a minimum length
pub fn description_rule(min_length: usize) -> ValidationRule {
    ValidationRule {
        required: true,
        min_length: Some(min_length),
        ..Default::default()
    }
}

/// Rule for the people field: a count within an inclusive range
pub fn people_rule(min: i64, max: i64) -> ValidationRule {
    ValidationRule {
        required: true,
        min: Some(min),
        max: Some(max),
        ..Default::default()
    }
}

/// Gate for project creation: all three field rules must pass
pub fn validate_draft(draft: &ProjectDraft, rules: &CreationRules) -> bool {
    validate(&draft.title.as_str().into(), &title_rule())
        && validate(
            &draft.description.as_str().into(),
            &description_rule(rules.description_min_length),
        )
        && validate(
            &draft.people.into(),
            &people_rule(rules.people_min, rules.people_max),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_required_rejects_empty_text() {
        let rule = title_rule();
        assert!(!validate(&text(""), &rule));
        assert!(validate(&text("Build shed"), &rule));
    }

    #[test]
    fn test_required_accepts_numeric_zero() {
        // Presence is textual emptiness; zero is still a present number
        let rule = ValidationRule {
            required: true,
            ..Default::default()
        };
        assert!(validate(&FieldValue::Number(0), &rule));
    }

    #[test]
    fn test_min_length_boundary() {
        let rule = description_rule(5);
        assert!(!validate(&text("hell"), &rule));
        assert!(validate(&text("hello"), &rule));
        assert!(validate(&text("hello there"), &rule));
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let rule = description_rule(5);
        assert!(validate(&text("héllo"), &rule));
    }

    #[test]
    fn test_max_length_boundary() {
        let rule = ValidationRule {
            max_length: Some(3),
            ..Default::default()
        };
        assert!(validate(&text("abc"), &rule));
        assert!(!validate(&text("abcd"), &rule));
    }

    #[test]
    fn test_numeric_range_inclusive() {
        let rule = people_rule(1, 5);
        assert!(!validate(&FieldValue::Number(0), &rule));
        assert!(validate(&FieldValue::Number(1), &rule));
        assert!(validate(&FieldValue::Number(3), &rule));
        assert!(validate(&FieldValue::Number(5), &rule));
        assert!(!validate(&FieldValue::Number(6), &rule));
    }

    #[test]
    fn test_zero_bound_is_enforced() {
        // A bound of zero is a bound, not an absent one
        let rule = ValidationRule {
            min: Some(0),
            ..Default::default()
        };
        assert!(!validate(&FieldValue::Number(-1), &rule));
        assert!(validate(&FieldValue::Number(0), &rule));

        let rule = ValidationRule {
            max: Some(0),
            ..Default::default()
        };
        assert!(validate(&FieldValue::Number(0), &rule));
        assert!(!validate(&FieldValue::Number(1), &rule));
    }

    #[test]
    fn test_zero_min_length_is_enforced() {
        let rule = ValidationRule {
            min_length: Some(0),
            ..Default::default()
        };
        assert!(validate(&text(""), &rule));

        let rule = ValidationRule {
            max_length: Some(0),
            ..Default::default()
        };
        assert!(validate(&text(""), &rule));
        assert!(!validate(&text("a"), &rule));
    }

    #[test]
    fn test_bounds_only_apply_to_matching_type() {
        // Length bounds ignore numbers, numeric bounds ignore text
        let rule = ValidationRule {
            min_length: Some(10),
            ..Default::default()
        };
        assert!(validate(&FieldValue::Number(1), &rule));

        let rule = ValidationRule {
            min: Some(10),
            ..Default::default()
        };
        assert!(validate(&text("ok"), &rule));
    }

    #[test]
    fn test_unset_rule_accepts_anything() {
        let rule = ValidationRule::default();
        assert!(validate(&text(""), &rule));
        assert!(validate(&FieldValue::Number(-42), &rule));
    }

    #[test]
    fn test_draft_from_raw_trims_text() {
        let draft = ProjectDraft::from_raw("  Build shed  ", " Assemble the kit ", "2");
        assert_eq!(draft.title, "Build shed");
        assert_eq!(draft.description, "Assemble the kit");
        assert_eq!(draft.people, 2);
    }

    #[test]
    fn test_draft_from_raw_coerces_bad_people_input() {
        assert_eq!(ProjectDraft::from_raw("t", "d", "").people, 0);
        assert_eq!(ProjectDraft::from_raw("t", "d", "abc").people, 0);
        assert_eq!(ProjectDraft::from_raw("t", "d", "2.5").people, 0);
        assert_eq!(ProjectDraft::from_raw("t", "d", " 3 ").people, 3);
    }

    #[test]
    fn test_validate_draft_accepts_valid_input() {
        let draft = ProjectDraft::from_raw("Build shed", "Assemble the wooden shed kit", "2");
        assert!(validate_draft(&draft, &CreationRules::default()));
    }

    #[test]
    fn test_validate_draft_rejects_each_bad_field() {
        let rules = CreationRules::default();

        let draft = ProjectDraft::from_raw("", "Assemble the kit", "2");
        assert!(!validate_draft(&draft, &rules));

        let draft = ProjectDraft::from_raw("Build shed", "tiny", "2");
        assert!(!validate_draft(&draft, &rules));

        let draft = ProjectDraft::from_raw("Build shed", "Assemble the kit", "0");
        assert!(!validate_draft(&draft, &rules));

        let draft = ProjectDraft::from_raw("Build shed", "Assemble the kit", "6");
        assert!(!validate_draft(&draft, &rules));
    }

    #[test]
    fn test_validate_draft_whitespace_only_title_fails() {
        // Trimming happens before the rules run
        let draft = ProjectDraft::from_raw("   ", "Assemble the kit", "2");
        assert!(!validate_draft(&draft, &CreationRules::default()));
    }

    #[test]
    fn test_validate_draft_honors_custom_rules() {
        let rules = CreationRules {
            description_min_length: 1,
            people_min: 0,
            people_max: 10,
        };
        let draft = ProjectDraft::from_raw("t", "d", "0");
        assert!(validate_draft(&draft, &rules));

        let draft = ProjectDraft::from_raw("t", "d", "-1");
        assert!(!validate_draft(&draft, &rules));
    }

    #[test]
    fn test_creation_rules_defaults() {
        let rules = CreationRules::default();
        assert_eq!(rules.description_min_length, 5);
        assert_eq!(rules.people_min, 1);
        assert_eq!(rules.people_max, 5);
    }

    #[test]
    fn test_creation_rules_partial_json() {
        let rules: CreationRules = serde_json::from_str(r#"{"people_max": 9}"#).unwrap();
        assert_eq!(rules.people_max, 9);
        assert_eq!(rules.people_min, 1);
        assert_eq!(rules.description_min_length, 5);
    }
}
