// file: src/config/loader.rs
// version: 1.0.0
// guid: 6b29e4d8-0c17-4f95-a3de-58f1b20c7a96

//! Settings file loading and environment variable substitution

use super::Settings;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Settings loader with environment variable substitution
pub struct SettingsLoader {
    env_vars: HashMap<String, String>,
}

impl SettingsLoader {
    /// Create a new settings loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load settings from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::PrepError::config(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let settings: Settings = serde_yaml::from_str(&expanded)?;

        settings.validate()?;

        Ok(settings)
    }

    /// Expand `${VAR}` placeholders in the settings content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::PrepError::config(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::PrepError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set an environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = SettingsLoader::new();
        loader.set_env_var("TEST_VAR".to_string(), "test_value".to_string());

        let content = "key: ${TEST_VAR}";
        let result = loader.expand_env_vars(content).unwrap();
        assert_eq!(result, "key: test_value");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = SettingsLoader::new();
        let content = "key: ${IDRAC_MAAS_PREP_MISSING_VAR}";

        let result = loader.expand_env_vars(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_load_settings() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
credentials:
  username: root
  password: ${{IDRAC_TEST_PASSWORD}}
hosttype:
  cmp: cmp
hosts:
  cmp:
    - 10.0.0.21
    - 10.0.0.22
hosts_start: 1
ssh:
  trust_on_first_use: true
racadm:
  cfgLanNetworking:
    cfgNicSelection: 1
  cfgUserAdmin:
    cfgUserAdminPassword:
      2: changeme
"#
        )
        .unwrap();

        let mut loader = SettingsLoader::new();
        loader.set_env_var("IDRAC_TEST_PASSWORD".to_string(), "calvin".to_string());
        let settings = loader.load(file.path())?;

        assert_eq!(settings.credentials.username, "root");
        assert_eq!(settings.credentials.password, "calvin");
        assert_eq!(settings.hosts["cmp"].len(), 2);
        assert_eq!(settings.hosts_start, 1);
        assert!(settings.ssh.trust_on_first_use);
        assert_eq!(settings.ssh.port, 22);
        assert_eq!(settings.racadm.len(), 2);

        Ok(())
    }

    #[test]
    fn test_load_rejects_missing_hosttype() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
credentials:
  username: root
  password: calvin
hosttype: {{}}
hosts:
  cmp:
    - 10.0.0.21
hosts_start: 1
racadm: {{}}
"#
        )
        .unwrap();

        let loader = SettingsLoader::new();
        assert!(loader.load(file.path()).is_err());
    }

    #[test]
    fn test_racadm_mapping_preserves_order() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
credentials:
  username: root
  password: calvin
hosttype:
  cmp: cmp
hosts:
  cmp:
    - 10.0.0.21
hosts_start: 1
racadm:
  cfgUserAdmin:
    cfgUserAdminUserName:
      2: maas
    cfgUserAdminPassword:
      2: changeme
    cfgUserAdminEnable:
      2: 1
"#
        )
        .unwrap();

        let loader = SettingsLoader::new();
        let settings = loader.load(file.path())?;

        let group = settings
            .racadm
            .get("cfgUserAdmin")
            .and_then(|v| v.as_mapping())
            .unwrap();
        let options: Vec<_> = group
            .iter()
            .filter_map(|(k, _)| k.as_str().map(str::to_string))
            .collect();
        assert_eq!(
            options,
            vec![
                "cfgUserAdminUserName",
                "cfgUserAdminPassword",
                "cfgUserAdminEnable"
            ]
        );

        Ok(())
    }
}
