use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg =
        HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_ROOT", "/srv/site")]))
            .unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn bad_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "70000".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"70000\" is not a port number");
}
