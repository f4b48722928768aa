// file: src/racadm/applier.rs
// version: 1.2.0
// guid: c7d04b92-3a58-4e17-8f6b-d15e92a04c37

//! Applies the racadm option tree to one controller
//!
//! The settings tree is walked in file order: group -> option -> scalar or
//! indexed mapping. Planning is separated from dispatch so the walk itself
//! never touches the network: `plan_commands` turns the tree into a command
//! list (substituting a generated password where the rotation option
//! appears) and `apply_settings` executes that list, logging failed sets
//! and moving on.

use super::{CommandOutcome, ConfigCommand, GeneratedPassword};
use crate::config::PasswordPolicy;
use crate::network::IdracSession;
use crate::Result;
use serde_yaml::{Mapping, Value};
use tracing::{debug, error, warn};

/// Commands planned for one host, plus the password generated on the way
#[derive(Debug)]
pub struct SettingsPlan {
    pub commands: Vec<ConfigCommand>,
    pub generated: Option<GeneratedPassword>,
}

/// Translate the racadm tree into config commands.
///
/// Scalar leaves (string or number) become one command each. Mapping leaves
/// become one command per index entry; when the option name matches the
/// policy's rotation option the value is replaced with a fresh password.
/// Any other value shape is warned about and skipped.
pub fn plan_commands(racadm: &Mapping, policy: &PasswordPolicy) -> SettingsPlan {
    let mut commands = Vec::new();
    let mut generated = None;

    for (group_key, group_value) in racadm.iter() {
        let Some(group) = scalar_string(group_key) else {
            warn!("Skipping racadm group with non-scalar key: {:?}", group_key);
            continue;
        };
        let Some(options) = group_value.as_mapping() else {
            warn!("Unrecognized settings under group {}: not a mapping", group);
            continue;
        };

        for (option_key, option_value) in options.iter() {
            let Some(option) = scalar_string(option_key) else {
                warn!("Skipping option with non-scalar key in {}", group);
                continue;
            };

            match option_value {
                Value::String(_) | Value::Number(_) => {
                    // Scalar leaves never carry the rotation option; on
                    // iDRAC user options are always indexed
                    let value = scalar_string(option_value).unwrap_or_default();
                    commands.push(ConfigCommand::new(group.as_str(), option.as_str(), None, value));
                }
                Value::Mapping(indexed) => {
                    for (index_key, index_value) in indexed.iter() {
                        let Some(index) = scalar_string(index_key) else {
                            warn!("Skipping non-scalar index in {}:{}", group, option);
                            continue;
                        };

                        let value = if option == policy.rotate_option {
                            let password = GeneratedPassword::generate(policy.length);
                            debug!(
                                "Password generated for {}:{} index {}: {}",
                                group,
                                option,
                                index,
                                password.as_str()
                            );
                            let value = password.as_str().to_string();
                            generated = Some(password);
                            value
                        } else {
                            match scalar_string(index_value) {
                                Some(value) => value,
                                None => {
                                    warn!(
                                        "Unrecognized setting {:?} in {}:{}:{}",
                                        index_value, group, option, index
                                    );
                                    continue;
                                }
                            }
                        };

                        commands.push(ConfigCommand::new(
                            group.as_str(),
                            option.as_str(),
                            Some(index),
                            value,
                        ));
                    }
                }
                other => {
                    warn!("Unrecognized setting {:?} in {}:{}", other, group, option);
                }
            }
        }
    }

    SettingsPlan {
        commands,
        generated,
    }
}

/// Apply the racadm tree to the controller behind `session`.
///
/// Failed sets are logged and skipped; only transport errors propagate.
/// Returns the password generated for this host, if the tree rotated one.
pub async fn apply_settings(
    session: &mut IdracSession,
    racadm: &Mapping,
    policy: &PasswordPolicy,
) -> Result<Option<GeneratedPassword>> {
    let plan = plan_commands(racadm, policy);

    for command in &plan.commands {
        let outcome = session.exec(&command.command_string()).await?;
        log_outcome(&outcome);
    }

    Ok(plan.generated)
}

fn log_outcome(outcome: &CommandOutcome) {
    if outcome.confirmed() {
        debug!("Successfully set: {}", outcome.command);
    } else {
        error!(
            "Failed: {} (exit {}) stdout:{} stderr:{}",
            outcome.command, outcome.exit_code, outcome.stdout, outcome.stderr
        );
    }
}

/// String form of a scalar YAML value; None for anything non-scalar
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
