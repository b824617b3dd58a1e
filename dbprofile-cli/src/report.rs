//! Plain-text rendering for the `env` command.

use dbprofile_env::{Resolved, Source, vars_for};
use dbprofile_types::{ConnectionField, DeploymentMode};

const MASK: &str = "********";

fn display_value(resolved: &Resolved) -> String {
    match (&resolved.value, resolved.field) {
        (None, _) => "-".to_string(),
        (Some(v), _) if v.is_empty() => "\"\"".to_string(),
        (Some(_), ConnectionField::Password) => MASK.to_string(),
        (Some(v), _) => v.clone(),
    }
}

fn display_source(resolved: &Resolved) -> String {
    match resolved.source {
        Source::Primary(name) => name.to_string(),
        Source::Fallback(name) => format!("{} (legacy)", name),
        Source::Unset => {
            let vars = vars_for(resolved.field);
            format!("unset ({} / {})", vars.primary, vars.fallback)
        }
    }
}

/// Renders one line per field: name, value (password masked) and source.
pub fn render_resolution(mode: DeploymentMode, fields: &[Resolved]) -> String {
    let mut out = format!("mode      {}\n", mode);
    for resolved in fields {
        out.push_str(&format!(
            "{:<9} {:<24} {}\n",
            resolved.field.as_str(),
            display_value(resolved),
            display_source(resolved)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(field: ConnectionField, value: Option<&str>, source: Source) -> Resolved {
        Resolved {
            field,
            value: value.map(str::to_string),
            source,
        }
    }

    #[test]
    fn test_password_is_masked() {
        let out = render_resolution(
            DeploymentMode::Development,
            &[resolved(
                ConnectionField::Password,
                Some("hunter2"),
                Source::Primary("DB_PASSWORD"),
            )],
        );

        assert!(!out.contains("hunter2"));
        assert!(out.contains(MASK));
        assert!(out.contains("DB_PASSWORD"));
    }

    #[test]
    fn test_sources_are_labelled() {
        let out = render_resolution(
            DeploymentMode::Production,
            &[
                resolved(ConnectionField::Host, Some("h1"), Source::Primary("DB_HOST")),
                resolved(ConnectionField::User, Some("u2"), Source::Fallback("MYSQL_USER")),
                resolved(ConnectionField::Database, None, Source::Unset),
            ],
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "mode      production");
        assert!(lines[1].starts_with("host") && lines[1].ends_with("DB_HOST"));
        assert!(lines[2].ends_with("MYSQL_USER (legacy)"));
        assert!(lines[3].ends_with("unset (DB_NAME / MYSQL_DATABASE_NAME)"));
    }

    #[test]
    fn test_empty_value_is_visible() {
        let out = render_resolution(
            DeploymentMode::Development,
            &[resolved(
                ConnectionField::Password,
                Some(""),
                Source::Fallback("MYSQL_PASSWORD"),
            )],
        );
        assert!(out.contains("\"\""));
    }
}
