//! The product module catalog and the subscription gate over it.
//!
//! The gate only decides what the navigation renders as clickable. The
//! backend enforces access on its own.

use crate::session::{KeyValueStore, SessionRecord, SessionStore};
use log::warn;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Portal {
    Agency,
    TowerCompany,
}

impl Portal {
    pub const ALL: [Portal; 2] = [Portal::Agency, Portal::TowerCompany];

    pub fn route_prefix(&self) -> &'static str {
        match self {
            Portal::Agency => "/agency",
            Portal::TowerCompany => "/tower",
        }
    }

    pub fn home_route(&self) -> &'static str {
        match self {
            Portal::Agency => "/agency/dashboard",
            Portal::TowerCompany => "/tower/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Portal> {
        Portal::ALL
            .into_iter()
            .find(|p| path.starts_with(p.route_prefix()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleTarget {
    /// Home route of whichever portal is rendering the catalog.
    PortalHome,
    External(&'static str),
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Module {
    pub name: &'static str,
    pub target: ModuleTarget,
}

impl Module {
    pub fn href(&self, portal: Portal) -> String {
        match self.target {
            ModuleTarget::PortalHome => portal.home_route().to_string(),
            ModuleTarget::External(url) => url.to_string(),
            ModuleTarget::Placeholder => "#".to_string(),
        }
    }

    /// The portal-home module is active anywhere under either portal.
    pub fn is_active(&self, path: &str) -> bool {
        matches!(self.target, ModuleTarget::PortalHome) && Portal::from_path(path).is_some()
    }
}

pub const ENERGY_URL: &str = "https://energy.globalguard.com.au";

pub const MODULE_CATALOG: [Module; 6] = [
    Module {
        name: "Security",
        target: ModuleTarget::PortalHome,
    },
    Module {
        name: "Energy",
        target: ModuleTarget::External(ENERGY_URL),
    },
    Module {
        name: "Real Estate",
        target: ModuleTarget::Placeholder,
    },
    Module {
        name: "Site Master",
        target: ModuleTarget::Placeholder,
    },
    Module {
        name: "Facilities",
        target: ModuleTarget::Placeholder,
    },
    Module {
        name: "Compliance",
        target: ModuleTarget::Placeholder,
    },
];

/// Subscription tokens, lower-cased once on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscribedModules(BTreeSet<String>);

impl SubscribedModules {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(tokens.into_iter().map(|t| t.as_ref().to_lowercase()).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_session(record: &SessionRecord) -> Self {
        Self::new(record.subscribed_modules())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps a catalog display name to the token the backend uses for it.
///
/// "Real Estate" loses its space, "Site Master" keeps it. Both are matched
/// exactly as the backend spells them.
pub fn subscription_token(module_name: &str) -> String {
    let lower = module_name.to_lowercase();
    match lower.as_str() {
        "real estate" => "realestate".to_string(),
        "site master" => "site master".to_string(),
        _ => lower,
    }
}

pub fn is_module_enabled(module_name: &str, subscribed: &SubscribedModules) -> bool {
    subscribed.contains(&subscription_token(module_name))
}

/// Subscribed modules of the stored session. An unreadable session enables
/// nothing.
pub fn enabled_modules<S: KeyValueStore>(sessions: &SessionStore<S>) -> SubscribedModules {
    match sessions.read() {
        Ok(Some(record)) => SubscribedModules::from_session(&record),
        Ok(None) => SubscribedModules::empty(),
        Err(e) => {
            warn!("cannot read subscribed modules: {e}");
            SubscribedModules::empty()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: &'static str,
    pub href: String,
    pub enabled: bool,
    pub active: bool,
}

/// The catalog as the navigation should render it on `current_path`.
pub fn module_entries(
    subscribed: &SubscribedModules,
    portal: Portal,
    current_path: &str,
) -> Vec<ModuleEntry> {
    MODULE_CATALOG
        .iter()
        .map(|m| ModuleEntry {
            name: m.name,
            href: m.href(portal),
            enabled: is_module_enabled(m.name, subscribed),
            active: m.is_active(current_path),
        })
        .collect()
}
