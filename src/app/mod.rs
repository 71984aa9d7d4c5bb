//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`RegionPicker`] - Region dropdown state
//! - [`AppMessage`] - Messages for async communication
//!
//! The app owns the [`DashboardState`], feeds it events and runs the
//! effects the reducer hands back on spawned tasks.

mod effects;
mod handlers;
mod messages;
mod state_methods;
mod types;

pub use effects::{run_effect, spawn_effect};
pub use messages::AppMessage;
pub use types::{Focus, RegionPicker};

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::api::StatsClient;
use crate::config::TrackerConfig;
use crate::models::MetricType;
use crate::state::DashboardState;

/// Main application state
pub struct App {
    /// Reducer-owned dashboard state
    pub state: DashboardState,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Current focus
    pub focus: Focus,
    /// Region dropdown
    pub picker: RegionPicker,
    /// First visible row of the country table
    pub table_offset: usize,
    /// Counter hit areas from the last frame (for mouse clicks)
    pub counter_areas: Vec<(Rect, MetricType)>,
    /// Stats API client shared with fetch tasks
    pub client: StatsClient,
    /// Runtime configuration
    pub config: TrackerConfig,
    /// Sender handed to fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create an app talking to the configured API.
    pub fn new(config: TrackerConfig) -> Self {
        let client = StatsClient::from_config(&config);
        Self::with_client(client, config)
    }

    /// Create an app with an explicit client (tests inject a mock transport).
    pub fn with_client(client: StatsClient, config: TrackerConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            focus: Focus::default(),
            picker: RegionPicker::default(),
            table_offset: 0,
            counter_areas: Vec::new(),
            client,
            config,
            message_tx,
            message_rx: Some(message_rx),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("focus", &self.focus)
            .field("should_quit", &self.should_quit)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
