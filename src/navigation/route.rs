//! # Route Definitions
//!
//! Every navigable screen has a [`RouteName`]. Names form a closed set, so a
//! menu entry or a guard redirect can only ever point at a route that exists.
//! The string form of each name is the one the browser-side router uses.

use super::error::NavigationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Name prefix shared by every admin-scoped route.
pub const ADMIN_ROUTE_PREFIX: &str = "admin";

macro_rules! route_names {
    ($($variant:ident => $name:literal,)+) => {
        /// Symbolic identity of a route.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RouteName {
            $($variant,)+
        }

        impl RouteName {
            pub const ALL: &'static [RouteName] = &[$(RouteName::$variant,)+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(RouteName::$variant => $name,)+
                }
            }
        }
    };
}

route_names! {
    Layout => "layout",
    AdminLayout => "layout-admin",
    HeaderLayout => "layout-header",
    LoginLayout => "layout-login",
    UserLayout => "layout-user",

    Index => "index",
    Login => "login-page",
    Register => "register-page",
    PasswordReset => "password-reset-page",
    About => "about",
    Page404 => "page-404",

    DriveFile => "drive-file-page",
    DriveFileFolder => "drive-file-page-folder",
    DriveFileImage => "drive-file-page-type-image",
    DriveFileVideo => "drive-file-page-type-video",
    DriveFileAudio => "drive-file-page-type-audio",
    DriveFileDocument => "drive-file-page-type-document",
    DriveFileSearch => "drive-file-search-page",
    DriveFileRecycleBin => "drive-file-recycle-bin-page",
    DriveFileAttrs => "drive-file-attrs-page",
    DriveFilePermission => "drive-file-permission-page",
    DriveShareToken => "drive-share-token-page",
    DriveTag => "drive-tag-page",

    UserPersonal => "user-personal-page",
    UserPersonalWithFolder => "user-personal-page-with-folder",
    UserPersonalShares => "user-personal-page-shares",
    UserPersonalFavorites => "user-personal-page-favorites",
    UserSetting => "user-setting-page",
    UserSearch => "user-search-page",
    UserShare => "user-share-page",
    UserFavorite => "user-favorite-page",
    UserFavoriteWithId => "user-favorite-page-with-id",
    UserStats => "user-stats-page",

    AdminIndex => "admin-index",
    AdminUserLists => "admin-user-lists",
    AdminUserGroupLists => "admin-user-group-lists",
    AdminUserGroupDetails => "admin-user-group-details",
    AdminUserFiles => "admin-user-files",
    AdminUserLoginLogs => "admin-user-login-logs",
    AdminUserShares => "admin-user-shares",
    AdminUserOperationLogs => "admin-user-operation-logs",
    AdminUserDetails => "admin-user-details",
    AdminFileLists => "admin-file-lists",
    AdminFolderLists => "admin-folder-lists",
    AdminShareLists => "admin-share-lists",
    AdminStorageDetails => "admin-storage-details",
    AdminTagGroups => "admin-tag-groups",
    AdminTags => "admin-tags",
    AdminTagInfo => "admin-tag-info",
    AdminTagGroupInfo => "admin-tag-group-info",
    AdminSystemLogs => "admin-system-logs",
    AdminLoginLogs => "admin-login-logs",
    AdminSystemJobs => "admin-system-jobs",
    AdminOperationLogs => "admin-operation-logs",
    AdminSystemMonitor => "admin-system-monitor",
    AdminClusterMonitor => "admin-cluster-monitor",
    AdminFileServerMonitor => "admin-file-server-monitor",
}

impl RouteName {
    /// Admin scope is decided by the name prefix alone.
    ///
    /// Note that the admin *layout* is named `layout-admin` and is therefore
    /// not admin-scoped itself; it only redirects to `/admin`, which is.
    pub fn is_admin_scope(self) -> bool {
        self.as_str().starts_with(ADMIN_ROUTE_PREFIX)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| NavigationError::UnknownRoute(s.to_string()))
    }
}

impl Serialize for RouteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RouteName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Static metadata attached to a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    pub require_login: bool,
    /// The title is final and gets no suffix.
    pub original_title: bool,
}

impl RouteMeta {
    /// A titled route that needs a signed-in user.
    pub const fn private(title: &'static str) -> Self {
        Self {
            title: Some(title),
            require_login: true,
            original_title: false,
        }
    }

    /// A titled route open to anonymous visitors.
    pub const fn public(title: &'static str) -> Self {
        Self {
            title: Some(title),
            require_login: false,
            original_title: false,
        }
    }
}

/// Identifier of the screen a route renders.
///
/// The host resolves the identifier into an actual view the first time the
/// route is entered; the route table never loads anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ViewId(pub &'static str);

/// One entry of the route tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<RouteName>,
    pub view: Option<ViewId>,
    /// Target path for redirect records and layouts.
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// A named screen.
    pub fn screen(
        path: &'static str,
        name: RouteName,
        view: &'static str,
        meta: RouteMeta,
    ) -> Self {
        Self {
            path,
            name: Some(name),
            view: Some(ViewId(view)),
            redirect: None,
            meta,
            children: Vec::new(),
        }
    }

    /// An unnamed path that only forwards to another path.
    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            view: None,
            redirect: Some(to),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    /// A named layout wrapping `children`; visiting the layout path itself redirects.
    pub fn layout(
        path: &'static str,
        name: RouteName,
        view: &'static str,
        redirect: &'static str,
        children: Vec<RouteEntry>,
    ) -> Self {
        Self {
            path,
            name: Some(name),
            view: Some(ViewId(view)),
            redirect: Some(redirect),
            meta: RouteMeta::default(),
            children,
        }
    }
}
