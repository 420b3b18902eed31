//! Application state - the EmpathyBoard struct and its UI sub-state.

use crate::board::BoardState;
use crate::export::CaptureTracker;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use gpui::*;
use gpui_component::input::InputState;

/// Widgets and transient UI state
pub struct UiState {
    /// Text input for new notes
    pub note_input: Entity<InputState>,
    /// Inline input for the subject label, present only while editing
    pub label_input: Option<Entity<InputState>>,
    /// Keeps label input events flowing while editing
    pub label_subscription: Option<Subscription>,
    /// Toast notification manager
    pub toast_manager: ToastManager,
    /// Repaints fading toasts and drops expired ones; dropping it stops the loop
    pub toast_sweep: Option<Task<()>>,
    /// Input subscriptions that live as long as the view
    pub _subscriptions: Vec<Subscription>,
}

/// Main application view - owns the board and exposes its operations to the UI
pub struct EmpathyBoard {
    /// Notes, quadrants and subject label
    pub board: BoardState,
    /// User preferences
    pub settings: Settings,
    /// UI state
    pub ui: UiState,
    /// Capture progress
    pub capture: CaptureTracker,
}
