//! Toast notifications shown in the top-right corner.
//!
//! Capture progress is reported through these: a `Loading` toast while the
//! export runs, replaced by exactly one `Success` or `Error` toast.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Length of the fade-out at the end of a toast's lifetime
const FADE_DURATION: Duration = Duration::from_millis(300);

/// Repaint interval while a toast is fading
const FADE_FRAME: Duration = Duration::from_millis(30);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Warning,
    Error,
    /// Stays until dismissed explicitly
    Loading,
}

impl ToastVariant {
    pub fn default_duration(self) -> Duration {
        match self {
            ToastVariant::Success => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
            ToastVariant::Loading => Duration::MAX,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
            ToastVariant::Loading => "…",
        }
    }

    /// Accent color as 0xRRGGBB
    pub fn accent(self) -> u32 {
        match self {
            ToastVariant::Success => 0x10b981,
            ToastVariant::Loading => 0x3b82f6,
            ToastVariant::Warning => 0xf59e0b,
            ToastVariant::Error => 0xef4444,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Loading)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.variant != ToastVariant::Loading && self.created_at.elapsed() >= self.duration
    }

    /// Time until the toast expires; `None` for toasts that never do.
    pub fn time_left(&self) -> Option<Duration> {
        if self.variant == ToastVariant::Loading {
            return None;
        }
        Some(self.duration.saturating_sub(self.created_at.elapsed()))
    }

    /// Opacity for rendering; fades out over the last moments of the lifetime.
    pub fn opacity(&self) -> f32 {
        match self.time_left() {
            Some(left) if left < FADE_DURATION => {
                left.as_secs_f32() / FADE_DURATION.as_secs_f32()
            }
            _ => 1.0,
        }
    }

    /// How long the view may wait before this toast looks different.
    fn next_change(&self) -> Option<Duration> {
        let left = self.time_left()?;
        if left > FADE_DURATION {
            Some(left - FADE_DURATION)
        } else {
            Some(left.min(FADE_FRAME))
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Dismiss a toast. Returns false if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Delay until the next repaint is needed: a fade starting, a fade frame,
    /// or an expiry. `None` when only persistent toasts (or none) remain.
    pub fn next_refresh(&self) -> Option<Duration> {
        self.toasts.iter().filter_map(Toast::next_change).min()
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn remove_expired(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count_variant(&self, variant: ToastVariant) -> usize {
        self.toasts.iter().filter(|t| t.variant == variant).count()
    }
}
