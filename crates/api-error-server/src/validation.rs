use api_error_core::{ApiError, Details, ErrorKind, ValidationType};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Validation error code marking fields the schema does not know about
pub const UNRECOGNIZED_KEYS_CODE: &str = "unrecognized_keys";

/// One problem reported by schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    /// Input carried fields the schema does not declare
    UnrecognizedKeys { keys: Vec<String> },
    /// A field failed a validation rule
    Invalid { path: String, message: String },
}

impl SchemaIssue {
    /// Human-readable form used in the aggregated reason
    pub fn describe(&self) -> String {
        match self {
            Self::UnrecognizedKeys { keys } => format!("Unexpected fields: {}", keys.join(", ")),
            Self::Invalid { message, .. } => message.clone(),
        }
    }
}

/// Schema-validation failure, as produced by request body validation
///
/// Adapters turn it into a 422 whose `details.reason` lists every issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("schema validation failed: {}", aggregate_reason(.issues))]
pub struct SchemaViolation {
    issues: Vec<SchemaIssue>,
}

impl SchemaViolation {
    pub const fn new(issues: Vec<SchemaIssue>) -> Self {
        Self { issues }
    }

    /// Failure listing fields the schema does not declare
    pub fn from_unknown_fields<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(vec![SchemaIssue::UnrecognizedKeys {
            keys: keys.into_iter().map(Into::into).collect(),
        }])
    }

    pub fn issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<SchemaIssue> {
        self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Every issue description joined with `". "`
    pub fn reason(&self) -> String {
        aggregate_reason(&self.issues)
    }

    /// Build the 422 error for the given validation domain
    ///
    /// The aggregated reason is attached as `details.reason`.
    pub fn to_api_error(&self, kind: ValidationType) -> ApiError {
        let mut details = Details::new();
        details.insert("reason".to_owned(), self.reason().into());

        kind.error(Some(details))
    }
}

fn aggregate_reason(issues: &[SchemaIssue]) -> String {
    issues.iter().map(SchemaIssue::describe).collect::<Vec<_>>().join(". ")
}

impl From<&ValidationErrors> for SchemaViolation {
    fn from(errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues(errors, "", &mut issues);
        Self::new(issues)
    }
}

impl From<ValidationErrors> for SchemaViolation {
    fn from(errors: ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

/// Flatten nested validator errors into issues, fields in sorted order
fn collect_issues(errors: &ValidationErrors, prefix: &str, issues: &mut Vec<SchemaIssue>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    push_field_issue(&path, error, issues);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_issues(nested, &path, issues),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_issues(nested, &format!("{path}[{index}]"), issues);
                }
            }
        }
    }
}

fn push_field_issue(path: &str, error: &ValidationError, issues: &mut Vec<SchemaIssue>) {
    if error.code == UNRECOGNIZED_KEYS_CODE {
        // One issue for all unknown fields
        let existing = issues.iter_mut().find_map(|issue| match issue {
            SchemaIssue::UnrecognizedKeys { keys } => Some(keys),
            SchemaIssue::Invalid { .. } => None,
        });

        match existing {
            Some(keys) => keys.push(path.to_owned()),
            None => issues.push(SchemaIssue::UnrecognizedKeys {
                keys: vec![path.to_owned()],
            }),
        }
        return;
    }

    let message = error
        .message
        .as_deref()
        .map_or_else(|| format!("{path} is invalid"), str::to_owned);

    issues.push(SchemaIssue::Invalid {
        path: path.to_owned(),
        message,
    });
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use http::StatusCode;
    use serde_json::json;

    use super::*;

    fn field_error(code: &'static str, message: Option<&'static str>) -> ValidationError {
        let mut error = ValidationError::new(code);
        error.message = message.map(Cow::Borrowed);
        error
    }

    #[test]
    fn reason_joins_issues() {
        let violation = SchemaViolation::new(vec![
            SchemaIssue::UnrecognizedKeys {
                keys: vec!["hack".to_owned()],
            },
            SchemaIssue::Invalid {
                path: "email".to_owned(),
                message: "Email is not valid".to_owned(),
            },
        ]);

        assert_eq!(violation.reason(), "Unexpected fields: hack. Email is not valid");
    }

    #[test]
    fn unknown_fields_listed_together() {
        let violation = SchemaViolation::from_unknown_fields(["a", "b"]);
        assert_eq!(violation.reason(), "Unexpected fields: a, b");
    }

    #[test]
    fn api_error_carries_reason() {
        let error = SchemaViolation::from_unknown_fields(["role"]).to_api_error(ValidationType::User);

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "success": false,
                "type": "VALIDATION_USER",
                "statusCode": 422,
                "message": "User validation failed",
                "details": {"reason": "Unexpected fields: role"}
            })
        );
    }

    #[test]
    fn converts_validator_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("name", field_error("length", None));
        errors.add("hack", field_error(UNRECOGNIZED_KEYS_CODE, None));
        errors.add("email", field_error("email", Some("Email is not valid")));
        errors.add("extra", field_error(UNRECOGNIZED_KEYS_CODE, None));

        let violation = SchemaViolation::from(&errors);

        assert_eq!(
            violation.issues(),
            &[
                SchemaIssue::Invalid {
                    path: "email".to_owned(),
                    message: "Email is not valid".to_owned(),
                },
                SchemaIssue::UnrecognizedKeys {
                    keys: vec!["extra".to_owned(), "hack".to_owned()],
                },
                SchemaIssue::Invalid {
                    path: "name".to_owned(),
                    message: "name is invalid".to_owned(),
                },
            ]
        );
        assert_eq!(
            violation.reason(),
            "Email is not valid. Unexpected fields: extra, hack. name is invalid"
        );
    }

    #[test]
    fn display_includes_reason() {
        let violation = SchemaViolation::from_unknown_fields(["x"]);
        assert_eq!(violation.to_string(), "schema validation failed: Unexpected fields: x");
    }
}
