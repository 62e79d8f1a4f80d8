//! Check command - validate candidate project input without the board
//!
//! Runs the same creation gate the form uses and prints a per-field
//! verdict. The command succeeds either way; the verdict is data, not an
//! error.

use std::path::Path;

use serde::Serialize;

use crate::config::load_config;
use crate::domain::{
    description_rule, people_rule, title_rule, validate, FieldValue, ProjectDraft,
};
use crate::errors::{LanekitError, Result};

/// Per-field verdicts for one candidate project
#[derive(Debug, Serialize)]
struct CheckReport {
    title: bool,
    description: bool,
    people: bool,
    valid: bool,
}

/// Validate the given input and print the verdict
pub fn run(
    config_path: Option<&Path>,
    title: &str,
    description: &str,
    people: &str,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let rules = &config.rules;

    // Same trimming and coercion the form applies
    let draft = ProjectDraft::from_raw(title, description, people);

    let title_ok = validate(&FieldValue::Text(draft.title.clone()), &title_rule());
    let description_ok = validate(
        &FieldValue::Text(draft.description.clone()),
        &description_rule(rules.description_min_length),
    );
    let people_ok = validate(
        &FieldValue::Number(draft.people),
        &people_rule(rules.people_min, rules.people_max),
    );

    let report = CheckReport {
        title: title_ok,
        description: description_ok,
        people: people_ok,
        valid: title_ok && description_ok && people_ok,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| LanekitError::InvalidJson(e.to_string()))?;
        println!("{}", rendered);
    } else {
        println!("title:       {}", verdict(report.title));
        println!("description: {}", verdict(report.description));
        println!("people:      {}", verdict(report.people));
        println!("overall:     {}", verdict(report.valid));
    }

    Ok(())
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}
