//! # Menu Model
//!
//! Side menus of the portal, grouped into sections. A menu entry is either a
//! [`MenuNode::Link`] to a route or a [`MenuNode::Group`] that only labels and
//! nests other entries, so a link can never carry children and a group can
//! never point at a route.
//!
//! ```rust
//! use cloudhub_portal::menu::{standard_menus, MenuSectionKey};
//!
//! let menus = standard_menus();
//! let files = menus.request_children_menus(MenuSectionKey::User, "File");
//! assert_eq!(files.len(), 3);
//! assert!(menus.request_children_menus(MenuSectionKey::User, "Fav").is_empty());
//! ```

mod options;

pub use options::{convert_to_menu_options, validate_menus, MenuLabel, MenuOption};

use crate::navigation::{NavigationError, RouteName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key of the top-level "File" group in the user section.
pub const MENU_FILE: &str = "File";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Unknown menu section: {0}")]
    UnknownSection(String),

    #[error("Menu entry '{name}' links to unregistered route {route}")]
    DanglingLink { name: String, route: RouteName },

    #[error("Menu entry '{name}' cannot link to {route}: {source}")]
    UnlinkableRoute {
        name: String,
        route: RouteName,
        #[source]
        source: NavigationError,
    },

    #[error("Duplicate menu key '{key}' in section {section}")]
    DuplicateKey { section: MenuSectionKey, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSectionKey {
    User,
    Admin,
}

impl MenuSectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuSectionKey::User => "user",
            MenuSectionKey::Admin => "admin",
        }
    }
}

impl fmt::Display for MenuSectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuSectionKey {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MenuSectionKey::User),
            "admin" => Ok(MenuSectionKey::Admin),
            other => Err(MenuError::UnknownSection(other.to_string())),
        }
    }
}

/// Icons a menu entry can show next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Link {
        name: String,
        route: RouteName,
        icon: Option<Icon>,
    },
    Group {
        name: String,
        key: String,
        children: Vec<MenuNode>,
        icon: Option<Icon>,
    },
}

impl MenuNode {
    pub fn link(name: impl Into<String>, route: RouteName) -> Self {
        MenuNode::Link {
            name: name.into(),
            route,
            icon: None,
        }
    }

    pub fn group(name: impl Into<String>, key: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            name: name.into(),
            key: key.into(),
            children,
            icon: None,
        }
    }

    pub fn with_icon(mut self, value: Icon) -> Self {
        match &mut self {
            MenuNode::Link { icon, .. } | MenuNode::Group { icon, .. } => *icon = Some(value),
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            MenuNode::Link { name, .. } | MenuNode::Group { name, .. } => name,
        }
    }

    /// A link is keyed by its route name.
    pub fn key(&self) -> &str {
        match self {
            MenuNode::Link { route, .. } => route.as_str(),
            MenuNode::Group { key, .. } => key,
        }
    }

    pub fn icon(&self) -> Option<Icon> {
        match self {
            MenuNode::Link { icon, .. } | MenuNode::Group { icon, .. } => *icon,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Link { .. } => &[],
            MenuNode::Group { children, .. } => children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub key: MenuSectionKey,
    pub menus: Vec<MenuNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menus {
    sections: Vec<MenuSection>,
}

impl Menus {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn find_menu_section(&self, key: MenuSectionKey) -> Option<&MenuSection> {
        self.sections.iter().find(|section| section.key == key)
    }

    /// Top-level entry `key` of a section.
    pub fn request_menus_by_name(&self, section: MenuSectionKey, key: &str) -> Option<&MenuNode> {
        self.find_menu_section(section)?
            .menus
            .iter()
            .find(|menu| menu.key() == key)
    }

    /// Children of a top-level entry; empty when the entry is missing or a link.
    pub fn request_children_menus(&self, section: MenuSectionKey, key: &str) -> &[MenuNode] {
        self.request_menus_by_name(section, key)
            .map(MenuNode::children)
            .unwrap_or(&[])
    }
}

/// The user and admin side menus.
pub fn standard_menus() -> Menus {
    Menus::new(vec![
        MenuSection {
            key: MenuSectionKey::User,
            menus: vec![
                MenuNode::group(
                    "Files",
                    MENU_FILE,
                    vec![
                        MenuNode::link("Personal Home", RouteName::DriveFile).with_icon(Icon::File),
                        MenuNode::link("Tags", RouteName::DriveTag),
                        MenuNode::group("Organization Files", "Organization", Vec::new()),
                    ],
                ),
                MenuNode::group("Favorites", "Fav", Vec::new()),
                MenuNode::group("Shares", "Share", Vec::new()),
                MenuNode::group("Recycle Bin", "Recycle", Vec::new()),
            ],
        },
        MenuSection {
            key: MenuSectionKey::Admin,
            menus: vec![
                MenuNode::link("System Home", RouteName::AdminIndex),
                MenuNode::link("Back to Library", RouteName::DriveFile),
                MenuNode::group("User Management", "user-management", Vec::new()),
                MenuNode::group(
                    "File Management",
                    "file-management",
                    vec![MenuNode::group("File List", "file-management-list", Vec::new())],
                ),
                MenuNode::group("Tag Management", "file-tag", Vec::new()),
                MenuNode::group("Visual Data", "visual-data", Vec::new()),
                MenuNode::group(
                    "System Management",
                    "menuSystem",
                    vec![
                        MenuNode::group("System Settings", "systemSettings", Vec::new()),
                        MenuNode::group("System Logs", "systemLog", Vec::new()),
                        MenuNode::group("Cluster Monitor", "system-cluster-monitor", Vec::new()),
                        MenuNode::group("System Monitor", "system-management-monitor", Vec::new()),
                    ],
                ),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_found_by_key() {
        let menus = standard_menus();
        assert_eq!(menus.sections().len(), 2);
        assert_eq!(
            menus.find_menu_section(MenuSectionKey::Admin).map(|s| s.menus.len()),
            Some(7)
        );
        assert_eq!("admin".parse::<MenuSectionKey>(), Ok(MenuSectionKey::Admin));
        assert!("guest".parse::<MenuSectionKey>().is_err());
    }

    #[test]
    fn test_links_are_keyed_by_route_name() {
        let menus = standard_menus();
        let home = menus
            .request_menus_by_name(MenuSectionKey::Admin, "admin-index")
            .unwrap();
        assert!(matches!(home, MenuNode::Link { route: RouteName::AdminIndex, .. }));
        assert!(home.children().is_empty());
    }

    #[test]
    fn test_missing_entries_yield_nothing() {
        let menus = standard_menus();
        assert_eq!(
            menus.request_menus_by_name(MenuSectionKey::User, "nope"),
            None
        );
        assert!(menus.request_children_menus(MenuSectionKey::User, "nope").is_empty());
        assert!(menus
            .request_children_menus(MenuSectionKey::Admin, "admin-index")
            .is_empty());

        let empty = Menus::new(Vec::new());
        assert!(empty.find_menu_section(MenuSectionKey::User).is_none());
        assert!(empty.request_children_menus(MenuSectionKey::User, MENU_FILE).is_empty());
    }

    #[test]
    fn test_nested_children() {
        let menus = standard_menus();
        let system: Vec<_> = menus
            .request_children_menus(MenuSectionKey::Admin, "menuSystem")
            .iter()
            .map(MenuNode::key)
            .collect();
        assert_eq!(
            system,
            ["systemSettings", "systemLog", "system-cluster-monitor", "system-management-monitor"]
        );

        let files = menus.request_children_menus(MenuSectionKey::User, MENU_FILE);
        assert_eq!(files[0].icon(), Some(Icon::File));
        assert_eq!(files[0].name(), "Personal Home");
    }
}
