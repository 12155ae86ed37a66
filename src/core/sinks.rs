// Host-environment collaborator ports. The core decides whether and when to
// notify; these traits are how the decision leaves the core.

/// Fire-and-forget push notification (OS toast, Alt1 notification, ...).
pub trait NotificationSink: Send {
    fn notify(&mut self, title: &str, message: &str);
}

/// Overlay tooltip surface. Show and hide are fire-and-forget.
pub trait TooltipSink: Send {
    fn show_tooltip(&mut self, text: &str);
    fn hide_tooltip(&mut self);
}

/// Probe for the game overlay surface. When no probe is available the state
/// is unknown and tooltips are suppressed entirely.
pub trait OverlayProbe: Send {
    /// Whether the overlay surface is visible at all.
    fn is_visible(&self) -> bool;
    /// Whether the game window currently has focus.
    fn is_focused(&self) -> bool;
}
