use crate::config::ApiConfig;
use log::debug;

/// Read access to the page location. `protocol` includes the trailing colon,
/// as `window.location.protocol` does.
pub trait Location {
    fn protocol(&self) -> String;
    fn hostname(&self) -> String;
    fn pathname(&self) -> String;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticLocation {
    pub protocol: String,
    pub hostname: String,
    pub pathname: String,
}

impl StaticLocation {
    pub fn new(protocol: &str, hostname: &str, pathname: &str) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            pathname: pathname.into(),
        }
    }
}

impl Location for StaticLocation {
    fn protocol(&self) -> String {
        self.protocol.clone()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }
}

pub fn resolve_api_base(location: Option<&dyn Location>, config: &ApiConfig) -> String {
    let Some(location) = location else {
        return config.default_base_url.clone();
    };

    let hostname = location.hostname();
    if is_reserved_host(&hostname, &config.parent_domain) {
        let base = format!(
            "{}//{}:{}/api/v2",
            location.protocol(),
            hostname,
            config.api_port
        );
        debug!("api base resolved from host: {base}");
        base
    } else {
        config.default_base_url.clone()
    }
}

/// The parent domain itself or any subdomain of it, on a label boundary.
fn is_reserved_host(hostname: &str, parent_domain: &str) -> bool {
    if parent_domain.is_empty() {
        return false;
    }
    let host = hostname.to_ascii_lowercase();
    let parent = parent_domain.to_ascii_lowercase();
    host == parent || host.ends_with(&format!(".{parent}"))
}
