//! App state and core application logic
//!
//! Manages the route-driven view state, navigation history, and the
//! command/message exchange with the background request worker.
//!
//! Every route activation starts a new *generation*. Requests are tagged with
//! the generation they were issued under, and a response is applied only while
//! that generation is still current. Responses for a screen the user has
//! already left are dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api::EmbedService;
use crate::models::{MovieId, MovieSummary};
use crate::route::Route;

/// Maximum tiles shown in the trending and related grids
pub const GRID_LIMIT: usize = 10;

/// Tiles per grid row
pub const GRID_COLUMNS: usize = 5;

/// Watch screen header when no title is known
pub const DEFAULT_TITLE: &str = "Now Streaming";

// =============================================================================
// Worker Protocol
// =============================================================================

/// Requests sent from the app to the background worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Weekly trending list for the catalog
    FetchTrending { generation: u64 },
    /// Catalog search; `seq` orders searches within one activation
    SearchCatalog {
        generation: u64,
        seq: u64,
        query: String,
    },
    /// Title lookup for the watch screen
    FetchTitle { generation: u64, id: MovieId },
    /// Similar movies for the watch screen
    FetchRelated { generation: u64, id: MovieId },
    /// Watch-screen search that jumps to the first match
    JumpSearch { generation: u64, query: String },
    /// Open the embed player in the system browser
    OpenPlayer { url: String },
}

impl AppCommand {
    /// Generation the request was issued under, if it carries one
    pub fn generation(&self) -> Option<u64> {
        match self {
            AppCommand::FetchTrending { generation }
            | AppCommand::SearchCatalog { generation, .. }
            | AppCommand::FetchTitle { generation, .. }
            | AppCommand::FetchRelated { generation, .. }
            | AppCommand::JumpSearch { generation, .. } => Some(*generation),
            AppCommand::OpenPlayer { .. } => None,
        }
    }
}

/// Which request a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Trending,
    Search,
    Title,
    Related,
    JumpSearch,
}

/// Results sent from the background worker back to the app
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    TrendingLoaded {
        generation: u64,
        movies: Vec<MovieSummary>,
    },
    SearchLoaded {
        generation: u64,
        seq: u64,
        movies: Vec<MovieSummary>,
    },
    TitleLoaded {
        generation: u64,
        title: Option<String>,
    },
    RelatedLoaded {
        generation: u64,
        movies: Vec<MovieSummary>,
    },
    /// First hit of a jump search, `None` when nothing matched
    JumpResolved {
        generation: u64,
        first: Option<MovieId>,
    },
    /// A request failed; already logged by the worker
    RequestFailed {
        generation: u64,
        kind: RequestKind,
        error: String,
    },
    PlayerOpened { url: String },
    PlayerFailed { error: String },
}

impl AppMessage {
    /// Generation the response belongs to, if it carries one
    pub fn generation(&self) -> Option<u64> {
        match self {
            AppMessage::TrendingLoaded { generation, .. }
            | AppMessage::SearchLoaded { generation, .. }
            | AppMessage::TitleLoaded { generation, .. }
            | AppMessage::RelatedLoaded { generation, .. }
            | AppMessage::JumpResolved { generation, .. }
            | AppMessage::RequestFailed { generation, .. } => Some(*generation),
            AppMessage::PlayerOpened { .. } | AppMessage::PlayerFailed { .. } => None,
        }
    }
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// Status-bar message, cleared on the next keypress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

// =============================================================================
// Grid Selection
// =============================================================================

/// Selection within a tile grid laid out row-major
///
/// The grid may be split into sections (search results, then trending).
/// Each section starts on a fresh row, so vertical moves follow the rows
/// as drawn rather than stepping the flat index by a whole row.
#[derive(Debug, Clone)]
pub struct GridState {
    /// Currently selected index, flat across sections
    pub selected: usize,
    /// Total number of tiles
    pub len: usize,
    /// Tiles per row
    pub columns: usize,
    /// Lengths of the non-empty sections, in display order
    sections: Vec<usize>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Where a flat index sits on screen
struct Cell {
    section: usize,
    start: usize,
    row: usize,
    column: usize,
}

impl GridState {
    pub fn new(len: usize) -> Self {
        let mut grid = Self {
            selected: 0,
            len: 0,
            columns: GRID_COLUMNS,
            sections: Vec::new(),
        };
        grid.set_len(len);
        grid
    }

    pub fn left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move one row up, into the previous section's last row if needed
    pub fn up(&mut self) {
        let Some(cell) = self.cell(self.selected) else {
            return;
        };
        let columns = self.columns.max(1);
        if cell.row > 0 {
            self.selected = cell.start + (cell.row - 1) * columns + cell.column;
        } else if cell.section > 0 {
            let prev_len = self.sections[cell.section - 1];
            let prev_start = cell.start - prev_len;
            let last_row = self.row_of(prev_len - 1);
            self.selected = prev_start + (last_row * columns + cell.column).min(prev_len - 1);
        }
    }

    /// Move one row down, clamping to the last tile of the target row
    pub fn down(&mut self) {
        let Some(cell) = self.cell(self.selected) else {
            return;
        };
        let section_len = self.sections[cell.section];
        if cell.row < self.row_of(section_len - 1) {
            let target = (cell.row + 1) * self.columns.max(1) + cell.column;
            self.selected = cell.start + target.min(section_len - 1);
        } else if let Some(&next_len) = self.sections.get(cell.section + 1) {
            self.selected = cell.start + section_len + cell.column.min(next_len - 1);
        }
    }

    /// Jump to first tile
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last tile
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Row of a tile index within its section
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns.max(1)
    }

    /// Update length as a single section (e.g., when new results come in)
    pub fn set_len(&mut self, len: usize) {
        self.set_sections(&[len]);
    }

    /// Update the section lengths; empty sections are not drawn and are skipped
    pub fn set_sections(&mut self, lengths: &[usize]) {
        self.sections = lengths.iter().copied().filter(|&n| n > 0).collect();
        self.len = self.sections.iter().sum();
        if self.len == 0 {
            self.selected = 0;
        } else if self.selected >= self.len {
            self.selected = self.len - 1;
        }
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        let columns = self.columns.max(1);
        let mut start = 0;
        for (section, &n) in self.sections.iter().enumerate() {
            if index < start + n {
                let local = index - start;
                return Some(Cell {
                    section,
                    start,
                    row: local / columns,
                    column: local % columns,
                });
            }
            start += n;
        }
        None
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Query buffer with a cursor, one per screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    /// Search query
    pub query: String,
    /// Cursor position in query (byte offset, always on a char boundary)
    pub cursor: usize,
}

impl SearchInput {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.query[..self.cursor].char_indices().next_back() {
            self.query.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        if let Some((idx, _)) = self.query[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if let Some(c) = self.query[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Clear query
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// True when the query has no visible characters
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

// =============================================================================
// Catalog View State
// =============================================================================

/// Catalog screen: search box, search results, trending
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub search: SearchInput,
    /// Latest search results (uncapped)
    pub results: Vec<MovieSummary>,
    /// Trending this week (full list; rendering caps it)
    pub trending: Vec<MovieSummary>,
    /// Selection across the visible tiles, results first
    pub grid: GridState,
    /// Sequence number of the latest submitted search
    pub search_seq: u64,
}

impl CatalogState {
    /// Search results as rendered
    pub fn visible_results(&self) -> &[MovieSummary] {
        &self.results
    }

    /// Trending movies as rendered (first [`GRID_LIMIT`])
    pub fn visible_trending(&self) -> &[MovieSummary] {
        &self.trending[..self.trending.len().min(GRID_LIMIT)]
    }

    /// Number of selectable tiles
    pub fn visible_len(&self) -> usize {
        self.visible_results().len() + self.visible_trending().len()
    }

    /// Tile at a flat index (search results, then trending)
    pub fn tile_at(&self, index: usize) -> Option<&MovieSummary> {
        let results = self.visible_results();
        if index < results.len() {
            results.get(index)
        } else {
            self.visible_trending().get(index - results.len())
        }
    }

    /// Currently selected tile
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.tile_at(self.grid.selected)
    }

    pub fn set_results(&mut self, results: Vec<MovieSummary>) {
        self.results = results;
        self.sync_grid();
    }

    pub fn set_trending(&mut self, trending: Vec<MovieSummary>) {
        self.trending = trending;
        self.sync_grid();
    }

    fn sync_grid(&mut self) {
        let lengths = [self.visible_results().len(), self.visible_trending().len()];
        self.grid.set_sections(&lengths);
    }
}

// =============================================================================
// Detail View State
// =============================================================================

/// Watch screen lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// Title and/or related list still outstanding
    Loading,
    /// Both requests resolved (successfully or not)
    Ready,
}

/// Watch screen with a movie id
#[derive(Debug, Clone)]
pub struct WatchState {
    pub id: MovieId,
    /// Player URL, built from the id alone
    pub embed_url: String,
    /// Resolved title; `None` until loaded, or when missing
    pub title: Option<String>,
    /// Similar movies (full list; rendering caps it)
    pub related: Vec<MovieSummary>,
    pub title_resolved: bool,
    pub related_resolved: bool,
    pub grid: GridState,
}

impl WatchState {
    pub fn new(id: MovieId, embed_url: String) -> Self {
        Self {
            id,
            embed_url,
            title: None,
            related: Vec::new(),
            title_resolved: false,
            related_resolved: false,
            grid: GridState::new(0),
        }
    }

    pub fn phase(&self) -> DetailPhase {
        if self.title_resolved && self.related_resolved {
            DetailPhase::Ready
        } else {
            DetailPhase::Loading
        }
    }

    /// Header text, defaulting to [`DEFAULT_TITLE`]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Related movies as rendered (first [`GRID_LIMIT`])
    pub fn visible_related(&self) -> &[MovieSummary] {
        &self.related[..self.related.len().min(GRID_LIMIT)]
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.visible_related().get(self.grid.selected)
    }

    pub fn resolve_title(&mut self, title: Option<String>) {
        self.title = title.filter(|t| !t.is_empty());
        self.title_resolved = true;
    }

    pub fn resolve_related(&mut self, related: Vec<MovieSummary>) {
        self.related = related;
        self.related_resolved = true;
        self.grid.set_len(self.visible_related().len());
    }
}

/// Watch screen state machine
#[derive(Debug, Clone)]
pub enum DetailState {
    /// Route carried no id: dead end, no requests
    NoIdentifier,
    /// Player for one movie
    Watching(WatchState),
}

impl Default for DetailState {
    fn default() -> Self {
        DetailState::NoIdentifier
    }
}

impl DetailState {
    pub fn watching(&self) -> Option<&WatchState> {
        match self {
            DetailState::Watching(watch) => Some(watch),
            DetailState::NoIdentifier => None,
        }
    }

    pub fn watching_mut(&mut self) -> Option<&mut WatchState> {
        match self {
            DetailState::Watching(watch) => Some(watch),
            DetailState::NoIdentifier => None,
        }
    }
}

/// Watch screen: search box plus the state machine
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    pub search: SearchInput,
    pub state: DetailState,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current route
    pub route: Route,
    /// Previously visited routes
    pub history: Vec<Route>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Transient status-bar message
    pub notice: Option<Notice>,
    /// Current activation; responses from older ones are dropped
    pub generation: u64,

    // View-specific states
    pub catalog: CatalogState,
    pub detail: DetailView,

    /// Embed URL builder
    pub embed: EmbedService,

    cmd_tx: Option<mpsc::UnboundedSender<AppCommand>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            route: Route::Catalog,
            history: Vec::new(),
            running: true,
            input_mode: InputMode::Normal,
            notice: None,
            generation: 0,

            catalog: CatalogState::default(),
            detail: DetailView::default(),

            embed: EmbedService::default(),

            cmd_tx: None,
        }
    }
}

impl App {
    /// Create a new App instance with no worker attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an App and the receiving end of its command channel
    pub fn with_channels() -> (Self, mpsc::UnboundedReceiver<AppCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            cmd_tx: Some(tx),
            ..Self::default()
        };
        (app, rx)
    }

    /// Send a command to the worker
    fn dispatch(&self, cmd: AppCommand) {
        match &self.cmd_tx {
            Some(tx) => {
                if tx.send(cmd).is_err() {
                    tracing::warn!("app: worker channel closed, dropping command");
                }
            }
            None => tracing::debug!(?cmd, "app: no worker attached"),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Activate the initial route without touching history
    pub fn start(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.route, route);
        self.activate(&previous);
    }

    /// Navigate to a new route, pushing the current one to history
    pub fn navigate(&mut self, route: Route) {
        // Same route: nothing to remount
        if self.route == route {
            self.input_mode = InputMode::Normal;
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous.clone());
        self.activate(&previous);
    }

    /// Go back to the previous route
    pub fn back(&mut self) -> bool {
        // If in editing mode, exit editing first
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(prev) = self.history.pop() {
            let current = std::mem::replace(&mut self.route, prev);
            self.activate(&current);
            true
        } else {
            false
        }
    }

    /// Go to the catalog
    pub fn home(&mut self) {
        self.navigate(Route::Catalog);
    }

    /// Set up the state for `self.route` and issue its requests
    fn activate(&mut self, previous: &Route) {
        self.generation += 1;
        self.input_mode = InputMode::Normal;
        let generation = self.generation;
        tracing::debug!(route = %self.route, generation, "app: activating route");

        match self.route.clone() {
            Route::Catalog => {
                self.catalog = CatalogState::default();
                self.dispatch(AppCommand::FetchTrending { generation });
            }
            Route::Watch(id) => {
                // Moving between watch routes keeps the same screen, and with
                // it the search box contents
                if !matches!(previous, Route::Watch(_)) {
                    self.detail.search.clear();
                }
                match id {
                    None => self.detail.state = DetailState::NoIdentifier,
                    Some(id) => {
                        let embed_url = self.embed.embed_url(&id);
                        self.detail.state =
                            DetailState::Watching(WatchState::new(id.clone(), embed_url));
                        self.dispatch(AppCommand::FetchTitle {
                            generation,
                            id: id.clone(),
                        });
                        self.dispatch(AppCommand::FetchRelated { generation, id });
                    }
                }
            }
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // View Operations
    // -------------------------------------------------------------------------

    /// Search box of the current screen, if it has one
    pub fn active_search(&self) -> Option<&SearchInput> {
        match &self.route {
            Route::Catalog => Some(&self.catalog.search),
            Route::Watch(_) => match self.detail.state {
                DetailState::Watching(_) => Some(&self.detail.search),
                DetailState::NoIdentifier => None,
            },
        }
    }

    fn active_search_mut(&mut self) -> Option<&mut SearchInput> {
        match &self.route {
            Route::Catalog => Some(&mut self.catalog.search),
            Route::Watch(_) => match self.detail.state {
                DetailState::Watching(_) => Some(&mut self.detail.search),
                DetailState::NoIdentifier => None,
            },
        }
    }

    fn active_grid_mut(&mut self) -> Option<&mut GridState> {
        match &self.route {
            Route::Catalog => Some(&mut self.catalog.grid),
            Route::Watch(_) => self.detail.state.watching_mut().map(|w| &mut w.grid),
        }
    }

    /// Focus the search input of the current screen
    pub fn focus_search(&mut self) {
        if self.active_search().is_some() {
            self.input_mode = InputMode::Editing;
        }
    }

    /// Submit the current screen's search box. Returns true if a request
    /// was issued.
    pub fn submit_search(&mut self) -> bool {
        let generation = self.generation;
        match &self.route {
            Route::Catalog => {
                self.catalog.search_seq += 1;
                let cmd = AppCommand::SearchCatalog {
                    generation,
                    seq: self.catalog.search_seq,
                    query: self.catalog.search.query.clone(),
                };
                self.dispatch(cmd);
                true
            }
            Route::Watch(_) => {
                if self.detail.state.watching().is_none() || self.detail.search.is_blank() {
                    return false;
                }
                let query = self.detail.search.query.clone();
                self.dispatch(AppCommand::JumpSearch { generation, query });
                true
            }
        }
    }

    /// Navigate to the watch screen for a movie
    pub fn select_movie(&mut self, id: u64) {
        self.navigate(Route::watch(id));
    }

    /// Select the highlighted tile on the current screen
    pub fn select_current(&mut self) -> bool {
        let selected = match &self.route {
            Route::Catalog => self.catalog.selected_movie().map(|m| m.id),
            Route::Watch(_) => self
                .detail
                .state
                .watching()
                .and_then(|w| w.selected_movie())
                .map(|m| m.id),
        };
        match selected {
            Some(id) => {
                self.select_movie(id);
                true
            }
            None => false,
        }
    }

    /// Ask the worker to open the current embed URL in a browser
    pub fn open_player(&mut self) -> bool {
        let Some(watch) = self.detail.state.watching() else {
            return false;
        };
        if !matches!(self.route, Route::Watch(_)) {
            return false;
        }
        let url = watch.embed_url.clone();
        self.notice = Some(Notice::Info("Opening player...".to_string()));
        self.dispatch(AppCommand::OpenPlayer { url });
        true
    }

    // -------------------------------------------------------------------------
    // Worker Messages
    // -------------------------------------------------------------------------

    /// Apply a worker response. Returns false if it was stale and dropped.
    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        if let Some(generation) = msg.generation() {
            if generation != self.generation {
                tracing::debug!(
                    generation,
                    current = self.generation,
                    "app: dropping stale response"
                );
                return false;
            }
        }

        match msg {
            AppMessage::TrendingLoaded { movies, .. } => {
                if self.route != Route::Catalog {
                    return false;
                }
                self.catalog.set_trending(movies);
            }
            AppMessage::SearchLoaded { seq, movies, .. } => {
                if self.route != Route::Catalog || seq != self.catalog.search_seq {
                    tracing::debug!(seq, "app: dropping superseded search");
                    return false;
                }
                self.catalog.set_results(movies);
            }
            AppMessage::TitleLoaded { title, .. } => {
                let Some(watch) = self.detail.state.watching_mut() else {
                    return false;
                };
                watch.resolve_title(title);
            }
            AppMessage::RelatedLoaded { movies, .. } => {
                let Some(watch) = self.detail.state.watching_mut() else {
                    return false;
                };
                watch.resolve_related(movies);
            }
            AppMessage::JumpResolved { first, .. } => {
                let Some(id) = first else {
                    return true;
                };
                self.detail.search.clear();
                self.navigate(Route::Watch(Some(id)));
            }
            AppMessage::RequestFailed { kind, .. } => match kind {
                // Title and related failures still settle the watch screen
                RequestKind::Title => {
                    if let Some(watch) = self.detail.state.watching_mut() {
                        watch.resolve_title(None);
                    }
                }
                RequestKind::Related => {
                    if let Some(watch) = self.detail.state.watching_mut() {
                        let related = std::mem::take(&mut watch.related);
                        watch.resolve_related(related);
                    }
                }
                RequestKind::Trending | RequestKind::Search | RequestKind::JumpSearch => {}
            },
            AppMessage::PlayerOpened { url } => {
                self.notice = Some(Notice::Info(format!("Player opened: {}", url)));
            }
            AppMessage::PlayerFailed { error } => {
                self.notice = Some(Notice::Error(format!("Could not open browser: {}", error)));
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear notice on any keypress
        self.notice = None;

        // Global quit shortcut (Ctrl+C)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.submit_search();
                true
            }
            code => {
                let Some(search) = self.active_search_mut() else {
                    self.input_mode = InputMode::Normal;
                    return false;
                };
                match code {
                    KeyCode::Char(c) => search.insert(c),
                    KeyCode::Backspace => search.backspace(),
                    KeyCode::Delete => search.delete(),
                    KeyCode::Left => search.cursor_left(),
                    KeyCode::Right => search.cursor_right(),
                    KeyCode::Home => search.cursor_home(),
                    KeyCode::End => search.cursor_end(),
                    _ => return false,
                }
                true
            }
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                true
            }
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            KeyCode::Char('g') => {
                self.home();
                true
            }
            KeyCode::Char('o') => self.open_player(),
            KeyCode::Enter => self.select_current(),
            code => {
                let Some(grid) = self.active_grid_mut() else {
                    return false;
                };
                match code {
                    KeyCode::Left | KeyCode::Char('h') => grid.left(),
                    KeyCode::Right | KeyCode::Char('l') => grid.right(),
                    KeyCode::Up | KeyCode::Char('k') => grid.up(),
                    KeyCode::Down | KeyCode::Char('j') => grid.down(),
                    KeyCode::Home => grid.first(),
                    KeyCode::End => grid.last(),
                    _ => return false,
                }
                true
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
