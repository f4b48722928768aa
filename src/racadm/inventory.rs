// file: src/racadm/inventory.rs
// version: 1.0.0
// guid: f1a63c08-94d2-4b7e-a5c9-307d8e61f4b2

//! Reads the boot NIC MAC address from the controller hardware inventory

use crate::network::IdracSession;
use crate::Result;
use regex::Regex;
use tracing::{debug, info, warn};

/// Fetch the MAC address of `interface` from the hardware inventory.
///
/// Returns `None` when the inventory output carries no recognizable MAC
/// line; the record is still rendered with an empty value in that case.
pub async fn read_boot_mac(
    session: &mut IdracSession,
    interface: &str,
) -> Result<Option<String>> {
    info!("Getting MAC address for {}", interface);
    let command = format!("racadm hwinventory {}", interface);
    debug!("Running: {}", command);

    let outcome = session.exec(&command).await?;
    if !outcome.exit_ok() {
        warn!(
            "hwinventory {} failed (exit {}): {}",
            interface, outcome.exit_code, outcome.stderr
        );
        return Ok(None);
    }

    match extract_mac(&outcome.stdout) {
        Some(mac) => Ok(Some(mac)),
        None => {
            warn!("Unable to find MAC address for {}", interface);
            Ok(None)
        }
    }
}

/// Pull the lowercase MAC out of hwinventory text.
///
/// The inventory lists several address lines per NIC; the one we want is
/// the line-anchored `Current ... MAC Address:` entry.
pub fn extract_mac(inventory: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^Current .*MAC Address:\s+([0-9A-Fa-f:]{17})(?:\s|$)").ok()?;
    re.captures(inventory).map(|caps| caps[1].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mac_basic() {
        let output = "Current XYZ MAC Address:   AA:BB:CC:DD:EE:FF   \n";
        assert_eq!(extract_mac(output), Some("aa:bb:cc:dd:ee:ff".to_string()));
    }

    #[test]
    fn test_extract_mac_from_full_inventory() {
        let output = "Device Description: Integrated NIC 1 Port 2 Partition 1\n\
                      Permanent MAC Address: 24:6E:96:1F:8C:D0\n\
                      Current MAC Address:   24:6E:96:1F:8C:D1\n\
                      Virtual MAC Address: 00:00:00:00:00:00\n";
        assert_eq!(extract_mac(output), Some("24:6e:96:1f:8c:d1".to_string()));
    }

    #[test]
    fn test_extract_mac_at_end_of_output() {
        let output = "Current iSCSI MAC Address:\t24:6E:96:1F:8C:D2";
        assert_eq!(extract_mac(output), Some("24:6e:96:1f:8c:d2".to_string()));
    }

    #[test]
    fn test_extract_mac_requires_line_anchor() {
        // The label must start its line
        let output = "note: Current MAC Address:   AA:BB:CC:DD:EE:FF   \n";
        assert_eq!(extract_mac(output), None);
    }

    #[test]
    fn test_extract_mac_absent() {
        assert_eq!(extract_mac(""), None);
        assert_eq!(extract_mac("ERROR: unable to get the hwinventory\n"), None);
        assert_eq!(extract_mac("Permanent MAC Address: aa:bb\n"), None);
    }
}
