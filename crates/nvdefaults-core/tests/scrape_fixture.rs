//! End-to-end fixture run: parse a small defaults table and write the
//! output document, without touching the network.

use nvdefaults_core::{defaults, output};

/// Three entries: one full, one missing its description, one malformed
/// (no quoted name field).
const FIXTURE: &str = "\
/* NVRAM default values */\n\
struct nvram_tuple router_defaults[] = {\n\
\t{ \"wan_proto\", \"dhcp\", 0 },\t/* WAN connection type */\n\
\t{ \"lan_ipaddr\", \"192.168.1.1\" },\n\
\t{ no_quotes_here, \"oops\" },\n\
};\n";

#[test]
fn fixture_end_to_end() {
    let vars = defaults::parse_defaults(FIXTURE);

    // Exactly the two well-formed entries; the malformed line is dropped
    // and its value does not leak into a neighbouring record.
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["wan_proto"].default.as_deref(), Some("dhcp"));
    assert_eq!(vars["wan_proto"].description, "WAN connection type");
    assert_eq!(vars["lan_ipaddr"].default.as_deref(), Some("192.168.1.1"));
    assert_eq!(vars["lan_ipaddr"].description, "");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("firmware_variable_defaults.json");
    output::write_defaults(&vars, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(json["wan_proto"]["default"], "dhcp");
    assert_eq!(json["wan_proto"]["description"], "WAN connection type");
    assert_eq!(json["lan_ipaddr"]["description"], "");
    assert!(json.get("no_quotes_here").is_none());
}
