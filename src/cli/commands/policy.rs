use serde_json::{json, Value};

use crate::cli::utils::{output_rows, output_success};
use crate::cli::OutputFormat;
use crate::rbac::{self, Action, PolicyError, Resource, Role};

/// Errors on denial so the process exits non-zero, like `check`.

pub fn can(role: &str, resource: &str, action: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let role: Role = role.parse()?;
    let resource: Resource = resource.parse()?;
    if !rbac::can(role, resource, action)? {
        let action = Action::parse(action).ok_or_else(|| PolicyError::InvalidActionForResource {
            resource,
            action: action.to_string(),
        })?;
        return Err(PolicyError::Denied {
            role,
            resource,
            action,
        }
        .into());
    }

    let data = json!({
        "role": role,
        "resource": resource,
        "action": action.to_ascii_lowercase(),
        "allowed": true
    });

    output_success(
        output_format,
        &format!("{} may {} {}", role, action, resource),
        Some(data),
    )
}

pub fn matrix(role: Option<&str>, output_format: &OutputFormat) -> anyhow::Result<()> {
    let roles: Vec<Role> = match role {
        Some(raw) => vec![raw.parse()?],
        None => Role::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    let mut lines = Vec::new();
    for role in roles {
        for resource in Resource::ALL {
            let mut granted = Vec::new();
            for action in resource.actions() {
                if rbac::allows(role, resource, *action)? {
                    granted.push(action.as_str());
                }
            }
            lines.push(format!(
                "{:<9} {:<14} {}",
                role.as_str(),
                resource.as_str(),
                if granted.is_empty() { "-".to_string() } else { granted.join(",") }
            ));
            rows.push(json!({
                "role": role,
                "resource": resource,
                "granted": granted
            }));
        }
    }

    output_rows(output_format, "matrix", Value::Array(rows), &lines)
}
