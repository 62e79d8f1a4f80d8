//! Domain logic for projects, status lanes and input validation

mod project;
mod status;
mod validation;


pub use project::Project;
pub use status::{ProjectStatus, STATUS_LANES};
pub use validation::{
    description_rule, people_rule, title_rule, validate, validate_draft, CreationRules, FieldValue,
    ProjectDraft, ValidationRule,
};
