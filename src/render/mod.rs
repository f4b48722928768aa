// file: src/render/mod.rs
// version: 1.1.0
// guid: 07d9f3b6-4e82-4a51-bd3c-96e50a17c8f4

//! MAAS inventory fragment rendering
//!
//! Emits one YAML block per host. `${_param:...}` references are written
//! literally; the provisioning side resolves them, not this tool.

/// Inputs for one rendered host block
#[derive(Debug, Clone)]
pub struct HostRecord {
    pub prefix: String,
    pub host_type: String,
    /// Numeric record index (hosts_start + position in group)
    pub index: u32,
    /// Index string truncated to two characters, used in parameter names
    pub node_index: String,
    /// OS-level name of the deploy interface
    pub interface_name: String,
    /// Boot interface MAC; rendered empty when inventory lookup failed
    pub mac_address: Option<String>,
    /// Rotated IPMI/admin password
    pub power_password: String,
}

/// Derive the truncated two-character index string for parameter names
pub fn node_index(index: u32) -> String {
    let s = index.to_string();
    let end = s.len().min(2);
    s[..end].to_string()
}

/// Render the host's MAAS fragment. Pure function of the record.
pub fn render(record: &HostRecord) -> String {
    let mac = record.mac_address.as_deref().unwrap_or("");
    format!(
        "
{prefix}{index:>3}:
  disk_layout: ${{_param:maas_simple_disk_layout}}
  pxe_interface_mac: {mac}
  interfaces:
    nic01:
      type: eth
      name: {interface}
      mac: {mac}
      subnet: ${{_param:deploy_network_netmask}}
      gateway: ${{_param:deploy_network_gateway}}
      ip: ${{_param:openstack_{host_type}_node{node}_deploy_address}}
      mode: static
  power_parameters:
    power_address: ${{_param:openstack_{host_type}_node{node}_ipmi_address}}
    power_pass: {password}
    power_type: ipmi
    power_user: maas
",
        prefix = record.prefix,
        index = record.index,
        mac = mac,
        interface = record.interface_name,
        host_type = record.host_type,
        node = record.node_index,
        password = record.power_password,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> HostRecord {
        HostRecord {
            prefix: "cmp".to_string(),
            host_type: "cmp".to_string(),
            index: 5,
            node_index: node_index(5),
            interface_name: "eno2".to_string(),
            mac_address: Some("aa:bb:cc:dd:ee:ff".to_string()),
            power_password: "abc123XY".to_string(),
        }
    }

    #[test]
    fn test_render_golden() {
        let expected = "
cmp  5:
  disk_layout: ${_param:maas_simple_disk_layout}
  pxe_interface_mac: aa:bb:cc:dd:ee:ff
  interfaces:
    nic01:
      type: eth
      name: eno2
      mac: aa:bb:cc:dd:ee:ff
      subnet: ${_param:deploy_network_netmask}
      gateway: ${_param:deploy_network_gateway}
      ip: ${_param:openstack_cmp_node5_deploy_address}
      mode: static
  power_parameters:
    power_address: ${_param:openstack_cmp_node5_ipmi_address}
    power_pass: abc123XY
    power_type: ipmi
    power_user: maas
";
        assert_eq!(render(&sample_record()), expected);
    }

    #[test]
    fn test_render_missing_mac_is_empty() {
        let mut record = sample_record();
        record.mac_address = None;
        let rendered = render(&record);
        assert!(rendered.contains("pxe_interface_mac: \n"));
        assert!(rendered.contains("mac: \n"));
    }

    #[test]
    fn test_render_index_widths() {
        let mut record = sample_record();
        record.index = 42;
        record.node_index = node_index(42);
        let rendered = render(&record);
        assert!(rendered.contains("\ncmp 42:\n"));
        assert!(rendered.contains("openstack_cmp_node42_ipmi_address"));

        record.index = 104;
        record.node_index = node_index(104);
        let rendered = render(&record);
        assert!(rendered.contains("\ncmp104:\n"));
    }

    #[test]
    fn test_node_index_truncation() {
        assert_eq!(node_index(5), "5");
        assert_eq!(node_index(10), "10");
        assert_eq!(node_index(104), "10");
    }
}
