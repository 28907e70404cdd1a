//! # Route Table
//!
//! The full route tree of the portal plus path matching.
//!
//! Paths are matched segment by segment. A static segment beats a `:param`
//! segment, which beats the catch-all, so `/drive/files/folder/0` hits its
//! redirect record and not `/drive/files/folder/:folder`. Redirect records and
//! layouts forward to another path, which is matched again.
//!
//! Static segments match ASCII case-insensitively. Parameter values are
//! percent-encoded by [`RouteTable::href`] and decoded again when captured.

use super::error::NavigationError;
use super::route::{RouteEntry, RouteMeta, RouteName, ViewId};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use tracing::debug;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Upper bound on chained redirect records for a single resolve.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
    /// `:name(.*)*`, matches zero or more segments.
    CatchAll(&'static str),
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 3,
            Segment::Param(_) => 2,
            Segment::CatchAll(_) => 1,
        }
    }
}

fn compile(path: &'static str) -> Vec<Segment> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) => match param.find('(') {
                Some(end) => Segment::CatchAll(&param[..end]),
                None => Segment::Param(param),
            },
            None => Segment::Static(segment),
        })
        .collect()
}

/// A flattened route entry with its compiled path.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: Option<RouteName>,
    pub view: Option<ViewId>,
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    /// Name of the layout this record is nested in.
    pub parent: Option<RouteName>,
    segments: Vec<Segment>,
}

impl RouteRecord {
    fn matches(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll(name) => {
                    let rest: Vec<String> = parts
                        .get(index..)?
                        .iter()
                        .map(|part| decode(part))
                        .collect();
                    params.insert(name.to_string(), rest.join("/"));
                    return Some(params);
                }
                Segment::Static(expected) => {
                    if !parts.get(index)?.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.to_string(), decode(parts.get(index)?));
                }
            }
        }
        (parts.len() == self.segments.len()).then_some(params)
    }

    /// Higher is more specific. Any route without a catch-all outranks one with it.
    fn score(&self) -> (bool, Vec<u8>) {
        let bounded = !self
            .segments
            .iter()
            .any(|segment| matches!(segment, Segment::CatchAll(_)));
        (bounded, self.segments.iter().map(Segment::rank).collect())
    }

    /// Names of the `:param` segments in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) | Segment::CatchAll(name) => Some(*name),
            Segment::Static(_) => None,
        })
    }
}

/// Outcome of matching a concrete path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    /// The path that finally matched, after redirects.
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub meta: RouteMeta,
    pub view: Option<ViewId>,
    /// The originally requested path when a redirect record was followed.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteEntry>) -> Self {
        let mut records = Vec::new();
        flatten(&routes, None, &mut records);
        Self { routes, records }
    }

    /// The route tree as nested entries.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn by_name(&self, name: RouteName) -> Option<&RouteRecord> {
        self.records.iter().find(|record| record.name == Some(name))
    }

    pub fn contains(&self, name: RouteName) -> bool {
        self.by_name(name).is_some()
    }

    /// Matches `path` and follows redirect records to a final route.
    ///
    /// Query string and fragment are ignored.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, NavigationError> {
        let mut current = strip_query(path).to_string();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let (record, params) = self
                .best_match(&current)
                .ok_or_else(|| NavigationError::NoMatch(current.clone()))?;

            if let Some(target) = record.redirect {
                debug!(from = %current, to = target, "Following redirect record");
                redirected_from.get_or_insert_with(|| current.clone());
                current = target.to_string();
                continue;
            }

            let name = record
                .name
                .ok_or_else(|| NavigationError::NoMatch(current.clone()))?;
            return Ok(ResolvedRoute {
                name,
                path: current,
                params,
                meta: record.meta,
                view: record.view,
                redirected_from,
            });
        }

        Err(NavigationError::RedirectLoop(path.to_string()))
    }

    /// Builds the concrete path of `name`, substituting `params`.
    ///
    /// Extra parameters are ignored; a missing or empty one is an error.
    /// Values are percent-encoded, except that a catch-all value keeps its `/`.
    pub fn href(
        &self,
        name: RouteName,
        params: &[(&str, &str)],
    ) -> Result<String, NavigationError> {
        let record = self
            .by_name(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        let mut path = String::new();
        for segment in &record.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(param) | Segment::CatchAll(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == param)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| NavigationError::MissingParam {
                            route: name.to_string(),
                            param: param.to_string(),
                        })?;
                    if matches!(segment, Segment::CatchAll(_)) {
                        let pieces: Vec<String> = value
                            .split('/')
                            .map(|piece| utf8_percent_encode(piece, SEGMENT).to_string())
                            .collect();
                        path.push_str(&pieces.join("/"));
                    } else {
                        path.extend(utf8_percent_encode(value, SEGMENT));
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    fn best_match(&self, path: &str) -> Option<(&RouteRecord, BTreeMap<String, String>)> {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        let mut best: Option<(&RouteRecord, BTreeMap<String, String>, (bool, Vec<u8>))> = None;

        for record in &self.records {
            let Some(params) = record.matches(&parts) else {
                continue;
            };
            let score = record.score();
            // Earlier records win ties.
            if best.as_ref().map_or(true, |(_, _, top)| score > *top) {
                best = Some((record, params, score));
            }
        }

        best.map(|(record, params, _)| (record, params))
    }

    /// Every route of the portal.
    pub fn standard() -> Self {
        use super::route::{RouteMeta as M, RouteName as N};

        let e = RouteEntry::screen;
        let files = "file/FileView";
        let personal = "user/PersonalHomeView";
        let monitor = "admin/system/ServerMonitorView";

        Self::new(vec![
            RouteEntry::layout(
                "/layout/side",
                N::Layout,
                "Layout",
                "/",
                vec![
                    RouteEntry::redirect("/drive", "/drive/files"),
                    RouteEntry::redirect("/drive/files/folder/0", "/drive/files"),
                    e("/drive/files", N::DriveFile, files, M::private("Files")),
                    e(
                        "/drive/files/folder/:folder",
                        N::DriveFileFolder,
                        files,
                        M::private("Files"),
                    ),
                    e(
                        "/drive/files/image",
                        N::DriveFileImage,
                        files,
                        M::private("Images"),
                    ),
                    e(
                        "/drive/files/video",
                        N::DriveFileVideo,
                        files,
                        M::private("Videos"),
                    ),
                    e(
                        "/drive/files/audio",
                        N::DriveFileAudio,
                        files,
                        M::private("Audio"),
                    ),
                    e(
                        "/drive/files/documents",
                        N::DriveFileDocument,
                        files,
                        M::private("Documents"),
                    ),
                    e(
                        "/drive/files/recycles",
                        N::DriveFileRecycleBin,
                        "file/FileRecycleView",
                        M::private("Recycle Bin"),
                    ),
                    e(
                        "/drive/files/search",
                        N::DriveFileSearch,
                        "file/FileSearchView",
                        M::private("File Search"),
                    ),
                    e(
                        "/:ownerType/:ownerId/drive/files/:type/:id/attrs",
                        N::DriveFileAttrs,
                        "file/FileAttrsView",
                        M::private("File Attributes"),
                    ),
                    e(
                        "/:ownerType/:ownerId/drive/files/:type/:id/permission",
                        N::DriveFilePermission,
                        "file/FilePermissionView",
                        M::private("File Permissions"),
                    ),
                    e(
                        "/drive/tags",
                        N::DriveTag,
                        "tag/FileTagsView",
                        M::private("Tags"),
                    ),
                    e(
                        "/user/setting",
                        N::UserSetting,
                        "user/UserSettingView",
                        M::private("User Settings"),
                    ),
                    e(
                        "/user/search",
                        N::UserSearch,
                        "user/UserSearchView",
                        M::private("User Search"),
                    ),
                    e(
                        "/user/statistics",
                        N::UserStats,
                        "user/UserStatsView",
                        M::private("Personal Statistics"),
                    ),
                    e(
                        "/user/shares",
                        N::UserShare,
                        "user/PersonalShareView",
                        M::private("My Shares"),
                    ),
                    e(
                        "/user/favorites",
                        N::UserFavorite,
                        "user/PersonalFavoriteView",
                        M::private("Favorites"),
                    ),
                    e(
                        "/user/favorites/:id",
                        N::UserFavoriteWithId,
                        "user/PersonalFavoriteView",
                        M::private("Favorites"),
                    ),
                ],
            ),
            RouteEntry::layout(
                "/layout/side/user",
                N::UserLayout,
                "user/UserHomeHeaderLayout",
                "/drive/files",
                vec![
                    e(
                        "/user/:id/home",
                        N::UserPersonal,
                        personal,
                        M::private("Personal Home"),
                    ),
                    e(
                        "/user/:id/home/files/:folder",
                        N::UserPersonalWithFolder,
                        personal,
                        M::private("Personal Home"),
                    ),
                    e(
                        "/user/:id/home/shares",
                        N::UserPersonalShares,
                        personal,
                        M::private("Personal Home"),
                    ),
                    e(
                        "/user/:id/home/favorites",
                        N::UserPersonalFavorites,
                        personal,
                        M::private("Personal Home"),
                    ),
                ],
            ),
            RouteEntry::layout(
                "/layout/admin",
                N::AdminLayout,
                "AdminLayout",
                "/admin",
                vec![
                    e(
                        "/admin",
                        N::AdminIndex,
                        "admin/AdminIndex",
                        M::private("Admin Home"),
                    ),
                    e(
                        "/admin/users",
                        N::AdminUserLists,
                        "admin/user/UsersList",
                        M::private("Users"),
                    ),
                    e(
                        "/admin/users/login/logs",
                        N::AdminLoginLogs,
                        "admin/system/LoginLogs",
                        M::private("User Login Logs"),
                    ),
                    e(
                        "/admin/users/:userId",
                        N::AdminUserDetails,
                        "admin/user/AdminUserDetails",
                        M::private("User Details"),
                    ),
                    e(
                        "/admin/users/:id/files",
                        N::AdminUserFiles,
                        "admin/user/resources/AdminUserFilesView",
                        M::private("User Files"),
                    ),
                    e(
                        "/admin/users/:id/shares",
                        N::AdminUserShares,
                        "admin/user/resources/AdminUserSharesView",
                        M::private("User Shares"),
                    ),
                    e(
                        "/admin/users/:id/logins",
                        N::AdminUserLoginLogs,
                        "admin/user/resources/AdminUserLoginLogsView",
                        M::private("User Login Logs"),
                    ),
                    e(
                        "/admin/users/:id/operations",
                        N::AdminUserOperationLogs,
                        "admin/user/resources/AdminUserOperationLogsView",
                        M::private("User Operation Logs"),
                    ),
                    e(
                        "/admin/users/groups",
                        N::AdminUserGroupLists,
                        "admin/user/UserGroupListsView",
                        M::private("User Groups"),
                    ),
                    e(
                        "/admin/users/groups/:id",
                        N::AdminUserGroupDetails,
                        "admin/user/UserGroupDetailsView",
                        M::private("User Group Details"),
                    ),
                    e(
                        "/admin/storages/files",
                        N::AdminFileLists,
                        "admin/file/FileListsView",
                        M::private("Files"),
                    ),
                    e(
                        "/admin/storages/folders",
                        N::AdminFolderLists,
                        "admin/file/FolderListsView",
                        M::private("Folders"),
                    ),
                    e(
                        "/admin/storages/shares",
                        N::AdminShareLists,
                        "admin/file/ShareListsView",
                        M::private("Shares"),
                    ),
                    e(
                        "/admin/storages/:ownerType/:ownerId/:type/:id",
                        N::AdminStorageDetails,
                        "admin/file/StorageDetailsView",
                        M::private("Storage Details"),
                    ),
                    e(
                        "/admin/tags/groups",
                        N::AdminTagGroups,
                        "admin/tag/AdminTagGroupsView",
                        M::private("Tag Groups"),
                    ),
                    e(
                        "/admin/tags/groups/:id",
                        N::AdminTagGroupInfo,
                        "admin/tag/AdminTagGroupInfoView",
                        M::private("Tag Group"),
                    ),
                    e(
                        "/admin/tags",
                        N::AdminTags,
                        "admin/tag/AdminTagsView",
                        M::private("Tags"),
                    ),
                    e(
                        "/admin/tags/:id",
                        N::AdminTagInfo,
                        "admin/tag/AdminTagInfoView",
                        M::private("Tag"),
                    ),
                    e(
                        "/admin/system/logs",
                        N::AdminSystemLogs,
                        "admin/system/SystemLogs",
                        M::private("System Logs"),
                    ),
                    e(
                        "/admin/system/operations",
                        N::AdminOperationLogs,
                        "admin/system/OperationLogs",
                        M::private("System Operation Logs"),
                    ),
                    e(
                        "/admin/system/jobs",
                        N::AdminSystemJobs,
                        "admin/system/SystemJobsView",
                        M::private("System Jobs"),
                    ),
                    e(
                        "/admin/system/monitor",
                        N::AdminSystemMonitor,
                        monitor,
                        M::private("System Monitor"),
                    ),
                    e(
                        "/admin/system/cfs/meta/monitor",
                        N::AdminClusterMonitor,
                        monitor,
                        M::private("Cluster Monitor"),
                    ),
                    e(
                        "/admin/system/cfs/:serverId/monitor",
                        N::AdminFileServerMonitor,
                        monitor,
                        M::private("File Server Monitor"),
                    ),
                ],
            ),
            e(
                "/",
                N::Index,
                "user/HomeView",
                RouteMeta {
                    title: Some(
                        "Cloudhub Personal File Library - Reliable, Professional Personal File Library",
                    ),
                    require_login: false,
                    original_title: true,
                },
            ),
            RouteEntry::layout(
                "/layout/header/login",
                N::LoginLayout,
                "user/LoginBackgroundLayout",
                "/error/404",
                vec![
                    e(
                        "/user/login",
                        N::Login,
                        "user/LoginView",
                        M::public("Sign In"),
                    ),
                    e(
                        "/user/register",
                        N::Register,
                        "user/LoginView",
                        M::public("Register"),
                    ),
                ],
            ),
            RouteEntry::layout(
                "/layout/header",
                N::HeaderLayout,
                "HeaderLayout",
                "/",
                vec![
                    e(
                        "/user/reset/password",
                        N::PasswordReset,
                        "user/PasswordResetView",
                        M::public("Reset Password"),
                    ),
                    e("/about", N::About, "system/About", M::public("About")),
                    e(
                        "/s/:token",
                        N::DriveShareToken,
                        "share/ShareView",
                        M::public("Share"),
                    ),
                    e("/error/404", N::Page404, "NotFound", M::public("404")),
                    RouteEntry::redirect("/:path(.*)*", "/error/404"),
                ],
            ),
        ])
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn flatten(entries: &[RouteEntry], parent: Option<RouteName>, out: &mut Vec<RouteRecord>) {
    for entry in entries {
        out.push(RouteRecord {
            path: entry.path,
            name: entry.name,
            view: entry.view,
            redirect: entry.redirect,
            meta: entry.meta,
            parent,
            segments: compile(entry.path),
        });
        flatten(&entry.children, entry.name.or(parent), out);
    }
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
