//! Root application module.
//!
//! Contains the main App component, AppContext definition, the listing and
//! dialog state, and application-level setup logic following Leptos
//! conventions.

use std::error::Error;
use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::FileManager;
use crate::config::{APP_NAME, APP_VERSION, SHARE_BASE_URL};
use crate::core::{
    DirectoryService, LoadSlot, RequestSeq, SelectionSet, ShareLinkState, Ticket, VisiblePage,
    begin_access, begin_details, clamp_page, configured_directory, filter_sorted, report_failure,
    visible_page,
};
use crate::models::{
    ActiveDialog, DirectoryUser, FileRecord, FilterSpec, ListStatus, LinkedResource, ShareGrant,
    SortKey,
};
use crate::utils::ViewPrefs;

// ============================================================================
// ListingState
// ============================================================================

/// File listing state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ListingState {
    /// Last snapshot returned by the directory.
    pub files: RwSignal<Vec<FileRecord>>,
    pub status: RwSignal<ListStatus>,
    pub filter: RwSignal<FilterSpec>,
    /// Current page, 1-based.
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub selection: RwSignal<SelectionSet>,
    seq: RwSignal<RequestSeq>,
}

impl ListingState {
    /// Creates listing state from the session's stored preferences.
    pub fn new(prefs: ViewPrefs) -> Self {
        let filter = FilterSpec {
            sort_by: prefs.sort_by,
            sort_order: prefs.sort_order,
            ..FilterSpec::default()
        };
        Self {
            files: RwSignal::new(Vec::new()),
            status: RwSignal::new(ListStatus::Loading),
            filter: RwSignal::new(filter),
            page: RwSignal::new(1),
            page_size: RwSignal::new(prefs.page_size),
            selection: RwSignal::new(SelectionSet::new()),
            seq: RwSignal::new(RequestSeq::default()),
        }
    }

    /// Rows for the current filter and page. Tracks every input signal.
    pub fn visible(&self) -> VisiblePage {
        let page = self.page.get();
        let page_size = self.page_size.get();
        self.files
            .with(|all| self.filter.with(|f| visible_page(all, f, page, page_size)))
    }

    /// Ids of every loaded file, in snapshot order.
    pub fn all_ids(&self) -> Vec<String> {
        self.files.with(|all| all.iter().map(|f| f.id.clone()).collect())
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| f.search = search);
        self.page.set(1);
    }

    pub fn set_category(&self, category: String) {
        self.filter.update(|f| f.category = category);
        self.page.set(1);
    }

    pub fn set_sort_key(&self, key: Option<SortKey>) {
        self.filter.update(|f| f.sort_by = key);
        self.page.set(1);
        self.save_prefs();
    }

    pub fn toggle_order(&self) {
        self.filter.update(|f| f.sort_order = f.sort_order.flipped());
        self.page.set(1);
        self.save_prefs();
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size.max(1));
        self.page.set(1);
        self.save_prefs();
    }

    /// Install a fresh snapshot: drop selected ids that vanished and pull the
    /// page back in range.
    fn replace_files(&self, files: Vec<FileRecord>) {
        let pruned = self
            .selection
            .try_update(|s| s.prune(files.iter().map(|f| f.id.as_str())))
            .unwrap_or(0);
        if pruned > 0 {
            tracing::debug!(pruned, "selection pruned after reload");
        }

        self.files.set(files);
        let total = self.visible_total_untracked();
        let size = self.page_size.get_untracked();
        self.page.update(|p| *p = clamp_page(*p, total, size));
        self.status.set(ListStatus::Ready);
    }

    fn visible_total_untracked(&self) -> usize {
        self.files
            .with_untracked(|all| self.filter.with_untracked(|f| filter_sorted(all, f).len()))
    }

    fn save_prefs(&self) {
        let (sort_by, sort_order) = self.filter.with_untracked(|f| (f.sort_by, f.sort_order));
        ViewPrefs {
            page_size: self.page_size.get_untracked(),
            sort_by,
            sort_order,
        }
        .save();
    }
}

// ============================================================================
// DialogState
// ============================================================================

/// State behind the per-file dialogs. At most one dialog is open.
#[derive(Clone, Copy)]
pub struct DialogState {
    pub active: RwSignal<Option<ActiveDialog>>,
    pub linked: RwSignal<LoadSlot<LinkedResource>>,
    pub grants: RwSignal<LoadSlot<ShareGrant>>,
    pub share_link: RwSignal<ShareLinkState>,
    /// Users offered by the access dialog's picker. Loaded on first use.
    pub users: RwSignal<Vec<DirectoryUser>>,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            linked: RwSignal::new(LoadSlot::default()),
            grants: RwSignal::new(LoadSlot::default()),
            share_link: RwSignal::new(ShareLinkState::new(SHARE_BASE_URL, "")),
            users: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Listing**: snapshot, filter, paging and selection
/// - **Dialogs**: details, share link and access dialogs with their loads
/// - **Service**: the [`DirectoryService`] every fetch goes through
#[derive(Clone, Copy)]
pub struct AppContext {
    pub listing: ListingState,
    pub dialogs: DialogState,
    /// Last user-facing failure, shown above the table until dismissed.
    pub notice: RwSignal<Option<String>>,
    service: StoredValue<Arc<dyn DirectoryService>>,
}

impl AppContext {
    pub fn new(service: Arc<dyn DirectoryService>) -> Self {
        tracing::info!(backend = service.backend(), "{APP_NAME} v{APP_VERSION} starting");
        Self {
            listing: ListingState::new(ViewPrefs::load()),
            dialogs: DialogState::new(),
            notice: RwSignal::new(None),
            service: StoredValue::new(service),
        }
    }

    pub fn service(&self) -> Arc<dyn DirectoryService> {
        self.service.get_value()
    }

    /// Log a failed operation and surface it in the notice bar.
    pub fn report(&self, operation: &str, target: &str, error: &dyn Error) {
        report_failure(operation, target, error);
        self.notice.set(Some(format!("Could not {operation}: {error}")));
    }

    // ------------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------------

    /// Re-fetch the file list. An older reload finishing late is ignored.
    pub fn reload_files(&self) {
        let ctx = *self;
        let Some(seq) = self.listing.seq.try_update(|s| s.issue()) else {
            return;
        };
        if self.listing.files.with_untracked(Vec::is_empty) {
            self.listing.status.set(ListStatus::Loading);
        }

        spawn_local(async move {
            let result = ctx.service().list_files().await;
            let current = ctx
                .listing
                .seq
                .try_with_untracked(|s| s.is_current(seq))
                .unwrap_or(false);
            if !current {
                return;
            }
            match result {
                Ok(files) => {
                    tracing::debug!(count = files.len(), "file list loaded");
                    ctx.listing.replace_files(files);
                }
                Err(e) => {
                    ctx.report("load files", "*", &e);
                    let message = if e.is_timeout() {
                        "the file service did not respond in time".to_string()
                    } else {
                        e.to_string()
                    };
                    ctx.listing.status.set(ListStatus::Failed(message));
                }
            }
        });
    }

    /// Set or clear a favorite flag, then reload the listing.
    pub fn set_favorite(&self, file_id: String, favorite: bool) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service().set_favorite(&file_id, favorite).await {
                Ok(()) => ctx.reload_files(),
                Err(e) => ctx.report("update favorite", &file_id, &e),
            }
        });
    }

    /// Pin or unpin, then reload the listing.
    pub fn set_pinned(&self, file_id: String, pinned: bool) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service().set_pinned(&file_id, pinned).await {
                Ok(()) => ctx.reload_files(),
                Err(e) => ctx.report("update pin", &file_id, &e),
            }
        });
    }

    /// Download every selected file, then clear the selection.
    pub fn download_selected(&self) {
        if self.listing.selection.with_untracked(SelectionSet::is_empty) {
            return;
        }
        let Some(ids) = self.listing.selection.try_with_untracked(|s| {
            s.ids().map(str::to_string).collect::<Vec<_>>()
        }) else {
            return;
        };
        let files: Vec<FileRecord> = self.listing.files.with_untracked(|all| {
            all.iter().filter(|f| ids.contains(&f.id)).cloned().collect()
        });
        for file in files {
            self.download(file);
        }
        self.listing.selection.update(SelectionSet::clear_all);
    }

    /// Fetch the file content and save it through the browser.
    pub fn download(&self, file: FileRecord) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service().download(&file.uuid).await {
                Ok(blob) => {
                    if !crate::utils::dom::save_blob(&blob.bytes, &blob.mime, &file.name) {
                        tracing::warn!(file_id = %file.id, "browser refused the download");
                    }
                }
                Err(e) => ctx.report("download", &file.id, &e),
            }
        });
    }

    /// Fetch the preview rendition and open it in a new tab.
    pub fn preview(&self, file: FileRecord) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service().preview(&file.uuid).await {
                Ok(blob) => {
                    if !crate::utils::dom::open_blob(&blob.bytes, &blob.mime) {
                        tracing::warn!(file_id = %file.id, "preview window blocked");
                    }
                }
                Err(e) => ctx.report("preview", &file.id, &e),
            }
        });
    }

    // ------------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------------

    /// Show details for `file`, fetching linked resources unless the file is
    /// in Personnel.
    pub fn open_details(&self, file: FileRecord) {
        let ticket = self
            .dialogs
            .linked
            .try_update(|slot| begin_details(slot, &file))
            .flatten();
        self.dialogs.active.set(Some(ActiveDialog::Details(file.clone())));

        let Some(ticket) = ticket else {
            tracing::debug!(file_id = %file.id, "linked resources skipped for personnel file");
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.service().linked_resources(&file).await;
            if let Err(e) = &result {
                report_failure("load linked resources", &file.id, e);
            }
            ctx.dialogs.linked.try_update(|slot| slot.resolve(ticket, result));
        });
    }

    pub fn open_share_link(&self, file: FileRecord) {
        self.dialogs
            .share_link
            .update(|s| s.reopen(SHARE_BASE_URL, &file.name));
        self.dialogs.active.set(Some(ActiveDialog::ShareLink(file)));
    }

    /// Show the access dialog for `file` and load its grants.
    pub fn open_access(&self, file: FileRecord) {
        let Some(ticket) = self
            .dialogs
            .grants
            .try_update(|slot| begin_access(slot, &file))
        else {
            return;
        };
        self.dialogs.active.set(Some(ActiveDialog::Access(file)));
        self.load_users();
        self.fetch_grants(ticket);
    }

    /// Re-fetch grants for the file the access dialog shows.
    pub fn reload_grants(&self) {
        if let Some(ticket) = self.dialogs.grants.try_update(|slot| slot.reload()).flatten() {
            self.fetch_grants(ticket);
        }
    }

    fn fetch_grants(&self, ticket: Ticket) {
        let ctx = *self;
        spawn_local(async move {
            let file_id = ticket.file_id().to_string();
            let result = ctx.service().share_grants(&file_id).await;
            if let Err(e) = &result {
                report_failure("load shares", &file_id, e);
            }
            ctx.dialogs.grants.try_update(|slot| slot.resolve(ticket, result));
        });
    }

    fn load_users(&self) {
        if !self.dialogs.users.with_untracked(Vec::is_empty) {
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            match ctx.service().list_users().await {
                Ok(users) => ctx.dialogs.users.set(users),
                Err(e) => report_failure("list users", "*", &e),
            }
        });
    }

    /// Close whatever dialog is open. Pending loads are discarded.
    pub fn close_dialog(&self) {
        self.dialogs.active.set(None);
        self.dialogs.linked.update(LoadSlot::close);
        self.dialogs.grants.update(LoadSlot::close);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the file manager and starts the first listing load
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(configured_directory());
    provide_context(ctx);
    ctx.reload_files();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7f8fa;
                    color: #1f2933;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #616e7c; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #c0392b;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2f6fed;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <FileManager />
        </ErrorBoundary>
    }
}
