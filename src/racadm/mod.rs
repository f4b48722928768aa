// file: src/racadm/mod.rs
// version: 1.1.0
// guid: 2e8a5f41-7b93-4c60-b1da-94c3e07f25a8

//! racadm command model
//!
//! Everything the tool does on the controller goes through two racadm
//! invocations: `racadm config` to set options and `racadm hwinventory`
//! to read the boot NIC. racadm exits zero even for some failed sets, so
//! the confirmation text in stdout stays part of the success check.

pub mod applier;
pub mod inventory;

pub use applier::apply_settings;
pub use inventory::read_boot_mac;

use rand::distributions::{Alphanumeric, DistString};

/// One `racadm config` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCommand {
    pub group: String,
    pub option: String,
    pub index: Option<String>,
    pub value: String,
}

impl ConfigCommand {
    pub fn new(
        group: impl Into<String>,
        option: impl Into<String>,
        index: Option<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            option: option.into(),
            index,
            value: value.into(),
        }
    }

    /// Render the remote command line
    pub fn command_string(&self) -> String {
        match &self.index {
            Some(index) => format!(
                "racadm config -g {} -o {} -i {} {}",
                self.group, self.option, index, self.value
            ),
            None => format!(
                "racadm config -g {} -o {} {}",
                self.group, self.option, self.value
            ),
        }
    }
}

/// Captured result of one remote command
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// The command exited zero
    pub fn exit_ok(&self) -> bool {
        self.exit_code == 0
    }

    /// A `racadm config` set was applied: zero exit and the confirmation
    /// text racadm prints on success
    pub fn confirmed(&self) -> bool {
        self.exit_ok() && self.stdout.contains("successfully")
    }
}

/// Password produced for one host's admin user rotation
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    /// Generate a random alphanumeric password
    pub fn generate(length: usize) -> Self {
        Self(Alphanumeric.sample_string(&mut rand::thread_rng(), length))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GeneratedPassword(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_string_scalar() {
        let cmd = ConfigCommand::new("cfgLanNetworking", "cfgNicSelection", None, "1");
        assert_eq!(
            cmd.command_string(),
            "racadm config -g cfgLanNetworking -o cfgNicSelection 1"
        );
    }

    #[test]
    fn test_command_string_indexed() {
        let cmd = ConfigCommand::new(
            "cfgUserAdmin",
            "cfgUserAdminEnable",
            Some("2".to_string()),
            "1",
        );
        assert_eq!(
            cmd.command_string(),
            "racadm config -g cfgUserAdmin -o cfgUserAdminEnable -i 2 1"
        );
    }

    #[test]
    fn test_outcome_confirmed() {
        let ok = CommandOutcome {
            command: "racadm config -g g -o o v".to_string(),
            exit_code: 0,
            stdout: "Object value modified successfully\n".to_string(),
            stderr: String::new(),
        };
        assert!(ok.confirmed());

        // Zero exit without the confirmation text is not a success
        let silent = CommandOutcome {
            exit_code: 0,
            stdout: "ERROR: invalid object name\n".to_string(),
            ..ok.clone()
        };
        assert!(!silent.confirmed());

        // Non-zero exit fails even when the text is present
        let failed = CommandOutcome {
            exit_code: 1,
            ..ok
        };
        assert!(!failed.confirmed());
    }

    #[test]
    fn test_generated_password_shape() {
        let pw = GeneratedPassword::generate(8);
        assert_eq!(pw.as_str().len(), 8);
        assert!(pw.as_str().chars().all(|c| c.is_ascii_alphanumeric()));

        let other = GeneratedPassword::generate(12);
        assert_eq!(other.as_str().len(), 12);
    }

    #[test]
    fn test_generated_password_debug_redacted() {
        let pw = GeneratedPassword::generate(8);
        assert_eq!(format!("{:?}", pw), "GeneratedPassword(..)");
    }
}
