//! Icon Table
//!
//! Every icon the UI renders is a variant here, resolved by an exhaustive
//! match instead of by name at runtime.

/// Icons used across the admin UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Spicy,
    ChefRecommended,
    Popular,
    Allergens,
    Instagram,
    Facebook,
    TikTok,
    WhatsApp,
    Website,
    Success,
    Error,
    Pending,
    Approved,
    Rejected,
    Upload,
    DragHandle,
}

impl Icon {
    /// (glyph, accessible label)
    fn entry(self) -> (&'static str, &'static str) {
        match self {
            Icon::Spicy => ("🌶", "Spicy"),
            Icon::ChefRecommended => ("👨‍🍳", "Chef's pick"),
            Icon::Popular => ("⭐", "Popular"),
            Icon::Allergens => ("⚠", "Allergens"),
            Icon::Instagram => ("📷", "Instagram"),
            Icon::Facebook => ("📘", "Facebook"),
            Icon::TikTok => ("🎵", "TikTok"),
            Icon::WhatsApp => ("💬", "WhatsApp"),
            Icon::Website => ("🌐", "Website"),
            Icon::Success => ("✓", "Success"),
            Icon::Error => ("✕", "Error"),
            Icon::Pending => ("⏳", "Pending"),
            Icon::Approved => ("✔", "Approved"),
            Icon::Rejected => ("✘", "Rejected"),
            Icon::Upload => ("⬆", "Upload"),
            Icon::DragHandle => ("⠿", "Drag to reorder"),
        }
    }

    pub fn glyph(self) -> &'static str {
        self.entry().0
    }

    pub fn label(self) -> &'static str {
        self.entry().1
    }
}
