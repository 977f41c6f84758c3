//! Leader model and display helpers.

/// A named office position that can be clocked in or out.
///
/// The leader row is the source of truth for current status; the referenced
/// session is the source of truth for timing. `is_active` must be true
/// exactly when `current_session_id` points at an open session.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    /// Stable identifier, e.g. `pres` or `vp`.
    pub id: String,
    /// Display label, e.g. "President".
    pub role: String,
    /// Display sort key. Missing sorts after every explicit order.
    pub sort_order: Option<i32>,
    /// Whether the leader is currently clocked in.
    pub is_active: bool,
    /// The open session this leader is clocked into, if any.
    pub current_session_id: Option<i64>,
}

impl Leader {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "In office"
        } else {
            "Out"
        }
    }
}
