/// Visibility toggled by the backend through the inbound show/hide calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Fully opaque, receives pointer events.
    #[default]
    Shown,
    /// Fully transparent, ignores pointer events.
    Hidden,
}

impl Visibility {
    pub fn opacity(self) -> f32 {
        match self {
            Visibility::Shown => 1.0,
            Visibility::Hidden => 0.0,
        }
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// CSS `pointer-events` value.
    pub fn pointer_events(self) -> &'static str {
        match self {
            Visibility::Shown => "auto",
            Visibility::Hidden => "none",
        }
    }
}
