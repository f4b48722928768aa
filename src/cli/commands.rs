// file: src/cli/commands.rs
// version: 1.2.0
// guid: 1c5f9d27-6e04-4b82-93af-70d2c8b5e416

//! Command implementations for the CLI

use crate::{
    config::{OnMissingPassword, SettingsLoader},
    network::IdracSession,
    racadm::{apply_settings, read_boot_mac, GeneratedPassword},
    render::{node_index, render, HostRecord},
    Result,
};
use std::fs::File;
use std::io::Write;
use tracing::{info, warn};

/// Configure every host and append its MAAS fragment to the output file
pub async fn provision_command(
    output_path: &str,
    settings_path: &str,
    dry_run: bool,
) -> Result<()> {
    let loader = SettingsLoader::new();
    let settings = loader.load(settings_path)?;
    let tasks = settings.host_tasks()?;

    if dry_run {
        for task in &tasks {
            info!(
                "DRY RUN: would configure {} as {}{:>3} (type {})",
                task.address, task.prefix, task.index, task.host_type
            );
        }
        info!("DRY RUN: would write {} records to {}", tasks.len(), output_path);
        return Ok(());
    }

    // Opened once and appended to incrementally; an aborted run leaves a
    // valid prefix of the records written so far.
    let mut output = File::create(output_path)?;

    for task in &tasks {
        let interface = settings.boot_interface_for(&task.host_type);

        let mut session = IdracSession::connect(
            &task.address,
            settings.ssh.port,
            &settings.credentials.username,
            &settings.credentials.password,
            settings.ssh.trust_on_first_use,
        )
        .await?;

        let generated =
            apply_settings(&mut session, &settings.racadm, &settings.password_policy).await?;

        let password = match generated {
            Some(password) => password,
            None => match settings.password_policy.on_missing {
                OnMissingPassword::Generate => {
                    warn!(
                        "No password rotation in settings; generating one for {}",
                        task.address
                    );
                    GeneratedPassword::generate(settings.password_policy.length)
                }
                OnMissingPassword::Fail => {
                    return Err(crate::error::PrepError::validation(format!(
                        "No admin password was rotated for {} and password_policy.on_missing is 'fail'",
                        task.address
                    )));
                }
            },
        };

        let mac_address = read_boot_mac(&mut session, &interface.inventory_id).await?;

        let record = HostRecord {
            prefix: task.prefix.clone(),
            host_type: task.host_type.clone(),
            index: task.index,
            node_index: node_index(task.index),
            interface_name: interface.os_name,
            mac_address,
            power_password: password.into_string(),
        };

        info!("Writing record for {}{:>3} to {}", task.prefix, task.index, output_path);
        output.write_all(render(&record).as_bytes())?;
    }

    info!("Wrote {} host records to {}", tasks.len(), output_path);
    Ok(())
}

/// Load and validate a settings file, reporting a short summary
pub async fn validate_command(settings_path: &str) -> Result<()> {
    let loader = SettingsLoader::new();
    let settings = loader.load(settings_path)?;

    let host_count: usize = settings.hosts.values().map(Vec::len).sum();
    info!(
        "Settings OK: {} host groups, {} hosts, {} racadm groups",
        settings.hosts.len(),
        host_count,
        settings.racadm.len()
    );
    for (prefix, hosts) in &settings.hosts {
        let host_type = settings
            .hosttype
            .get(prefix)
            .map(String::as_str)
            .unwrap_or("?");
        info!("  {}: {} hosts (type {})", prefix, hosts.len(), host_type);
    }

    Ok(())
}
