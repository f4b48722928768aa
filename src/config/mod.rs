// file: src/config/mod.rs
// version: 1.1.0
// guid: a3f82c19-5d70-4b4e-9c2d-71e08b6a5f43

//! Settings structures for iDRAC MAAS prep
//!
//! The settings file drives the whole run: iDRAC credentials, host groups,
//! the racadm option tree to apply, and the policies for SSH host keys and
//! admin password rotation.

pub mod loader;

pub use loader::SettingsLoader;

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level settings file contents
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// iDRAC login shared by every host
    pub credentials: Credentials,
    /// Host prefix -> MAAS host type tag (e.g. cmp -> cmp)
    pub hosttype: BTreeMap<String, String>,
    /// Host prefix -> ordered list of iDRAC addresses
    pub hosts: BTreeMap<String, Vec<String>>,
    /// Index assigned to the first host of each group
    pub hosts_start: u32,
    /// racadm group -> option -> scalar or indexed mapping.
    /// Kept as a YAML mapping: option order within a group is significant
    /// on iDRAC (e.g. a user password must be set before the user is enabled).
    pub racadm: serde_yaml::Mapping,
    #[serde(default)]
    pub ssh: SshPolicy,
    #[serde(default)]
    pub password_policy: PasswordPolicy,
    /// Host type -> boot interface selection, defaulting per `BootInterface`
    #[serde(default)]
    pub boot_interfaces: BTreeMap<String, BootInterface>,
}

/// iDRAC login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// SSH transport policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SshPolicy {
    /// SSH port of the management controller
    pub port: u16,
    /// Accept host keys not present in known_hosts. Freshly provisioned
    /// controllers are never in known_hosts, so provisioning runs normally
    /// enable this; the default refuses unknown keys.
    pub trust_on_first_use: bool,
}

impl Default for SshPolicy {
    fn default() -> Self {
        Self {
            port: 22,
            trust_on_first_use: false,
        }
    }
}

/// Admin password rotation policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// racadm option name whose value is replaced with a generated password
    pub rotate_option: String,
    /// Length of generated passwords
    pub length: usize,
    /// What to do when a host's racadm tree never rotates the password
    pub on_missing: OnMissingPassword,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            rotate_option: "cfgUserAdminPassword".to_string(),
            length: 8,
            on_missing: OnMissingPassword::Generate,
        }
    }
}

/// Behavior when no password rotation option was encountered for a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMissingPassword {
    /// Generate a fresh password anyway so the record is usable
    Generate,
    /// Treat the omission as a validation error and abort the run
    Fail,
}

/// Boot interface selection for one host type
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootInterface {
    /// Identifier passed to `racadm hwinventory`
    pub inventory_id: String,
    /// Interface name rendered into the MAAS record
    pub os_name: String,
}

impl Default for BootInterface {
    fn default() -> Self {
        Self {
            inventory_id: "NIC.Integrated.1-2-1".to_string(),
            os_name: "eno2".to_string(),
        }
    }
}

/// One host to be provisioned, with its record index already assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTask {
    pub prefix: String,
    pub host_type: String,
    pub address: String,
    pub index: u32,
}

impl Settings {
    /// Validate the loaded settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.credentials.username.is_empty() {
            return Err(crate::error::PrepError::validation(
                "credentials.username cannot be empty",
            ));
        }

        if self.credentials.password.is_empty() {
            return Err(crate::error::PrepError::validation(
                "credentials.password cannot be empty",
            ));
        }

        for prefix in self.hosts.keys() {
            if !self.hosttype.contains_key(prefix) {
                return Err(crate::error::PrepError::validation(format!(
                    "host group '{}' has no hosttype entry",
                    prefix
                )));
            }
        }

        if self.password_policy.rotate_option.is_empty() {
            return Err(crate::error::PrepError::validation(
                "password_policy.rotate_option cannot be empty",
            ));
        }

        if self.password_policy.length == 0 {
            return Err(crate::error::PrepError::validation(
                "password_policy.length must be at least 1",
            ));
        }

        Ok(())
    }

    /// Flatten the host groups into the per-host work list.
    ///
    /// The n-th host (0-based) of every group gets index `hosts_start + n`.
    pub fn host_tasks(&self) -> crate::Result<Vec<HostTask>> {
        let mut tasks = Vec::new();
        for (prefix, hosts) in &self.hosts {
            let host_type = self.hosttype.get(prefix).ok_or_else(|| {
                crate::error::PrepError::validation(format!(
                    "host group '{}' has no hosttype entry",
                    prefix
                ))
            })?;
            for (pos, address) in hosts.iter().enumerate() {
                tasks.push(HostTask {
                    prefix: prefix.clone(),
                    host_type: host_type.clone(),
                    address: address.clone(),
                    index: self.hosts_start + pos as u32,
                });
            }
        }
        Ok(tasks)
    }

    /// Boot interface for a host type, falling back to the Dell default
    pub fn boot_interface_for(&self, host_type: &str) -> BootInterface {
        self.boot_interfaces
            .get(host_type)
            .cloned()
            .unwrap_or_default()
    }
}
