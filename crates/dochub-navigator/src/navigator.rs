//! Navigation session orchestration.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use dochub_cache::SubfolderCache;
use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::NodeId;
use dochub_entity::breadcrumb::BreadcrumbPath;
use dochub_entity::node::{CreateDocument, DocumentNode};
use dochub_entity::repository::DocumentRepository;

use crate::path::PathBuilder;
use crate::state::NavigatorStatus;
use crate::validate::DestinationValidator;

/// What a failed navigation was trying to reach, kept for retry.
#[derive(Debug, Clone)]
enum NavTarget {
    Root,
    Folder(DocumentNode),
}

/// The view-facing projection of the navigator's state.
///
/// This is the `{location, path, children, selectedDestination, status}`
/// bundle the rendering layer consumes.
#[derive(Debug, Clone)]
pub struct NavigatorSnapshot {
    /// The folder currently browsed (`None` for root).
    pub location: Option<DocumentNode>,
    /// Breadcrumb path, root-first.
    pub path: BreadcrumbPath,
    /// Child folders of the current location, in backend order.
    pub children: Arc<Vec<DocumentNode>>,
    /// The folder chosen as move target, if any.
    pub selected_destination: Option<DocumentNode>,
    /// Lifecycle status.
    pub status: NavigatorStatus,
}

/// Orchestrates a move-dialog navigation session over the document tree.
///
/// The navigator owns its subfolder cache (session-scoped, not a process
/// singleton), builds breadcrumb paths, and validates move destinations.
/// All methods run on the consumer's single logical task; overlapping
/// navigations are resolved by a monotonically increasing request token
/// checked after every await, and closing the session cancels any
/// outstanding background work.
#[derive(Debug)]
pub struct Navigator {
    repository: Arc<dyn DocumentRepository>,
    cache: SubfolderCache,
    path_builder: PathBuilder,
    validator: DestinationValidator,
    warm_depth: usize,
    cancel: CancellationToken,

    status: NavigatorStatus,
    /// The document this session is moving.
    subject: Option<DocumentNode>,
    location: Option<DocumentNode>,
    path: BreadcrumbPath,
    children: Arc<Vec<DocumentNode>>,
    selected_destination: Option<DocumentNode>,
    failed_navigation: Option<NavTarget>,
    request_seq: u64,
}

impl Navigator {
    /// Create an idle navigator over the given repository.
    pub fn new(repository: Arc<dyn DocumentRepository>, config: &AppConfig) -> Self {
        let cache = SubfolderCache::new(Arc::clone(&repository), config.cache.max_capacity);
        let path_builder =
            PathBuilder::new(Arc::clone(&repository), config.navigator.max_breadcrumb_depth);
        let validator = DestinationValidator::new(path_builder.clone());

        Self {
            repository,
            cache,
            path_builder,
            validator,
            warm_depth: config.navigator.warm_depth,
            cancel: CancellationToken::new(),
            status: NavigatorStatus::Idle,
            subject: None,
            location: None,
            path: BreadcrumbPath::root_only(),
            children: Arc::new(Vec::new()),
            selected_destination: None,
            failed_navigation: None,
            request_seq: 0,
        }
    }

    // ── Accessors ──────────────────────────────────────────

    /// Current lifecycle status.
    pub fn status(&self) -> &NavigatorStatus {
        &self.status
    }

    /// The folder currently browsed (`None` for root).
    pub fn location(&self) -> Option<&DocumentNode> {
        self.location.as_ref()
    }

    /// Breadcrumb path, root-first.
    pub fn path(&self) -> &BreadcrumbPath {
        &self.path
    }

    /// Children of the current location.
    pub fn children(&self) -> &Arc<Vec<DocumentNode>> {
        &self.children
    }

    /// The folder chosen as move target, if any.
    pub fn selected_destination(&self) -> Option<&DocumentNode> {
        self.selected_destination.as_ref()
    }

    /// Project the full view state for the rendering layer.
    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            location: self.location.clone(),
            path: self.path.clone(),
            children: Arc::clone(&self.children),
            selected_destination: self.selected_destination.clone(),
            status: self.status.clone(),
        }
    }

    // ── Session lifecycle ──────────────────────────────────

    /// Start a session for moving `document`.
    ///
    /// Resolves the document's current parent folder (falling back to root
    /// if the parent cannot be fetched), builds its breadcrumb path, and
    /// loads the listing of the starting location.
    pub async fn initialize(&mut self, document: DocumentNode) {
        if self.cancel.is_cancelled() {
            return;
        }
        let token = self.begin_request();
        self.status = NavigatorStatus::Loading;
        self.subject = Some(document.clone());

        let location = match &document.parent_id {
            None => None,
            Some(parent_id) => match self.repository.get_by_id(parent_id).await {
                Ok(parent) => Some(parent),
                Err(e) => {
                    warn!(
                        document = %document.id,
                        parent = %parent_id,
                        error = %e,
                        "Could not resolve starting parent, falling back to root"
                    );
                    None
                }
            },
        };
        if self.superseded(token) {
            return;
        }

        // The initial path runs down to the document itself; the walk
        // degrades to a partial path on its own if ancestors are missing.
        let path = self.path_builder.build_path(&document).await;
        if self.superseded(token) {
            return;
        }

        let location_id = location.as_ref().map(|l| l.id.clone());
        match self.cache.get_children(location_id.as_ref()).await {
            Ok(children) => {
                if self.superseded(token) {
                    return;
                }
                self.location = location;
                self.path = path;
                self.children = children;
                self.status = NavigatorStatus::Ready;
                self.failed_navigation = None;
                self.spawn_warm(location_id);
            }
            Err(e) => {
                if self.superseded(token) {
                    return;
                }
                self.failed_navigation = Some(match location {
                    Some(folder) => NavTarget::Folder(folder),
                    None => NavTarget::Root,
                });
                // Root fallback keeps the dialog usable behind the error.
                self.location = None;
                self.path = BreadcrumbPath::root_only();
                self.children = Arc::new(Vec::new());
                self.status = NavigatorStatus::Error {
                    message: e.message.clone(),
                    failed_location: location_id,
                };
            }
        }
    }

    /// Close the session: cancel outstanding work and drop cached state.
    pub fn close(&mut self) {
        self.cancel.cancel();
        self.cache.clear();
        self.status = NavigatorStatus::Idle;
        self.selected_destination = None;
        self.failed_navigation = None;
    }

    // ── Navigation ─────────────────────────────────────────

    /// Browse into `folder`, or jump back to it if it is an ancestor.
    ///
    /// Breadcrumb semantics: a folder already present in the current path
    /// truncates the path back to itself; anything else extends the path.
    /// Navigating into the current location is a recognized no-op
    /// transition — state is left untouched and nothing is refetched.
    pub async fn navigate_into(&mut self, folder: DocumentNode) {
        if self.cancel.is_cancelled() {
            return;
        }
        if self.status.is_ready()
            && self.location.as_ref().map(|l| &l.id) == Some(&folder.id)
        {
            debug!(folder = %folder.id, "Already at this location, ignoring navigation");
            return;
        }

        let new_path = self.extend_or_truncate_path(&folder).await;
        self.load_listing(NavTarget::Folder(folder), new_path).await;
    }

    /// Jump back to the root level.
    pub async fn navigate_to_root(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        if self.status.is_ready() && self.location.is_none() {
            return;
        }
        self.load_listing(NavTarget::Root, BreadcrumbPath::root_only())
            .await;
    }

    /// Re-attempt the navigation that produced the current `Error` status.
    pub async fn retry(&mut self) {
        match self.failed_navigation.take() {
            Some(NavTarget::Root) => self.navigate_to_root().await,
            Some(NavTarget::Folder(folder)) => {
                let new_path = self.extend_or_truncate_path(&folder).await;
                self.load_listing(NavTarget::Folder(folder), new_path).await;
            }
            None => {}
        }
    }

    /// Fetch a listing and commit the transition, unless superseded.
    async fn load_listing(&mut self, target: NavTarget, new_path: BreadcrumbPath) {
        let token = self.begin_request();
        self.status = NavigatorStatus::Loading;

        let folder_id = match &target {
            NavTarget::Root => None,
            NavTarget::Folder(folder) => Some(folder.id.clone()),
        };

        match self.cache.get_children(folder_id.as_ref()).await {
            Ok(children) => {
                if self.superseded(token) {
                    debug!(folder = ?folder_id, "Listing superseded by newer navigation, discarding");
                    return;
                }
                self.location = match target {
                    NavTarget::Root => None,
                    NavTarget::Folder(folder) => Some(folder),
                };
                self.path = new_path;
                self.children = children;
                self.status = NavigatorStatus::Ready;
                self.failed_navigation = None;
            }
            Err(e) => {
                if self.superseded(token) {
                    return;
                }
                warn!(folder = ?folder_id, error = %e, "Navigation listing failed");
                self.failed_navigation = Some(target);
                self.status = NavigatorStatus::Error {
                    message: e.message.clone(),
                    failed_location: folder_id,
                };
            }
        }
    }

    /// Derive the path for navigating into `folder` from the current path.
    async fn extend_or_truncate_path(&self, folder: &DocumentNode) -> BreadcrumbPath {
        let mut path = self.path.clone();

        // Breadcrumb click: trim back to the ancestor.
        if let Some(pos) = path.position_of(Some(&folder.id)) {
            path.truncate_to(pos);
            return path;
        }

        // Descending: drop any tail beyond the current location (the
        // initial path ends at the document itself, not the location),
        // then append.
        let location_pos = match &self.location {
            None => path.position_of(None),
            Some(location) => path.position_of(Some(&location.id)),
        };
        if let Some(pos) = location_pos {
            path.truncate_to(pos);
            path.push_node(folder);
            return path;
        }

        // The current path does not contain the location (incomplete
        // walk); rebuild from scratch instead of guessing.
        self.path_builder.build_path(folder).await
    }

    // ── Mutations ──────────────────────────────────────────

    /// Create a folder under the current location and refresh the listing.
    ///
    /// Navigation state is otherwise unchanged: the new folder shows up in
    /// `children`, the location stays put.
    pub async fn create_folder_here(&mut self, title: &str) -> AppResult<DocumentNode> {
        self.ensure_open()?;
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Folder title cannot be empty"));
        }

        let parent_id = self.location.as_ref().map(|l| l.id.clone());
        let data = CreateDocument::folder(parent_id.clone(), title);
        let created = self.repository.create(&data).await?;

        self.cache.invalidate(parent_id.as_ref()).await;
        self.children = self.cache.get_children(parent_id.as_ref()).await?;

        info!(
            folder = %created.id,
            title = %created.title,
            parent = parent_id.as_ref().map(|p| p.as_str()),
            "Folder created"
        );
        Ok(created)
    }

    /// Record `folder` as the chosen move target without navigating.
    pub fn select_destination(&mut self, folder: DocumentNode) {
        self.selected_destination = Some(folder);
    }

    /// Drop the current destination selection.
    pub fn clear_destination(&mut self) {
        self.selected_destination = None;
    }

    /// Validate the selection and perform the move.
    ///
    /// The target is the selected destination, or the currently browsed
    /// location when nothing was explicitly selected. Validation failures
    /// surface as `Validation` errors — an invalid move is never silently
    /// ignored.
    pub async fn confirm_move(&mut self) -> AppResult<DocumentNode> {
        self.ensure_open()?;
        let subject = self
            .subject
            .clone()
            .ok_or_else(|| AppError::internal("No document in this navigation session"))?;

        let destination = self
            .selected_destination
            .clone()
            .or_else(|| self.location.clone());

        if let Some(destination) = &destination {
            self.validator.validate(&subject, destination).await?;
        }

        let old_parent = subject.parent_id.clone();
        let destination_id = destination.as_ref().map(|d| d.id.clone());
        let moved = self
            .repository
            .move_to(&subject.id, destination_id.as_ref())
            .await?;

        // Both the old and the new parent listings changed membership.
        self.cache.invalidate(old_parent.as_ref()).await;
        self.cache.invalidate(destination_id.as_ref()).await;
        self.subject = Some(moved.clone());
        self.selected_destination = None;

        info!(
            document = %moved.id,
            destination = destination_id.as_ref().map(|d| d.as_str()),
            "Document moved"
        );
        Ok(moved)
    }

    /// Check a candidate destination for the session's document.
    ///
    /// Exposed so the dialog can disable its confirm action while an
    /// invalid destination is selected.
    pub async fn is_valid_destination(&self, candidate: &DocumentNode) -> bool {
        match &self.subject {
            Some(subject) => self.validator.is_valid_destination(subject, candidate).await,
            None => false,
        }
    }

    // ── Internals ──────────────────────────────────────────

    fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Whether a newer navigation started (or the session closed) while
    /// the request holding `token` was in flight.
    fn superseded(&self, token: u64) -> bool {
        self.cancel.is_cancelled() || self.request_seq != token
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.cancel.is_cancelled() {
            return Err(AppError::cancelled("Navigation session closed"));
        }
        Ok(())
    }

    /// Warm the cache under `parent` in the background. Never blocks the
    /// foreground navigation path; results only populate the cache.
    fn spawn_warm(&self, parent: Option<NodeId>) {
        if self.warm_depth == 0 {
            return;
        }
        let cache = self.cache.clone();
        let cancel = self.cancel.clone();
        let depth = self.warm_depth;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = cache.warm_subtree(parent.as_ref(), depth) => {}
            }
        });
    }
}
