//! Conversion of menu trees into render-ready options, and tree validation.

use super::{Icon, MenuError, MenuNode, MenuSectionKey, Menus};
use crate::navigation::{RouteName, RouteTable};
use serde::Serialize;
use std::collections::HashSet;

/// What a menu option shows as its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuLabel {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    RouterLink {
        text: String,
        to: RouteName,
        href: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    pub key: String,
    pub label: MenuLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuOption>>,
}

/// Converts `nodes` into options, resolving each link's href in `table`.
///
/// Links never carry children. A group carries its converted children, or
/// none when it has no children at all.
pub fn convert_to_menu_options(
    nodes: &[MenuNode],
    table: &RouteTable,
) -> Result<Vec<MenuOption>, MenuError> {
    nodes.iter().map(|node| convert_node(node, table)).collect()
}

fn convert_node(node: &MenuNode, table: &RouteTable) -> Result<MenuOption, MenuError> {
    let option = match node {
        MenuNode::Link { name, route, icon } => MenuOption {
            key: route.as_str().to_string(),
            label: MenuLabel::RouterLink {
                text: name.clone(),
                to: *route,
                href: link_href(name, *route, table)?,
            },
            icon: *icon,
            children: None,
        },
        MenuNode::Group {
            name,
            key,
            children,
            icon,
        } => MenuOption {
            key: key.clone(),
            label: MenuLabel::Text { text: name.clone() },
            icon: *icon,
            children: if children.is_empty() {
                None
            } else {
                Some(convert_to_menu_options(children, table)?)
            },
        },
    };
    Ok(option)
}

/// Checks that every link resolves to a registered, parameterless route and
/// that sibling keys are unique.
pub fn validate_menus(menus: &Menus, table: &RouteTable) -> Result<(), MenuError> {
    for section in menus.sections() {
        validate_level(section.key, &section.menus, table)?;
    }
    Ok(())
}

fn validate_level(
    section: MenuSectionKey,
    nodes: &[MenuNode],
    table: &RouteTable,
) -> Result<(), MenuError> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.key()) {
            return Err(MenuError::DuplicateKey {
                section,
                key: node.key().to_string(),
            });
        }
        match node {
            MenuNode::Link { name, route, .. } => {
                link_href(name, *route, table)?;
            }
            MenuNode::Group { children, .. } => validate_level(section, children, table)?,
        }
    }
    Ok(())
}

fn link_href(name: &str, route: RouteName, table: &RouteTable) -> Result<String, MenuError> {
    if !table.contains(route) {
        return Err(MenuError::DanglingLink {
            name: name.to_string(),
            route,
        });
    }
    table
        .href(route, &[])
        .map_err(|source| MenuError::UnlinkableRoute {
            name: name.to_string(),
            route,
            source,
        })
}
