//! Menu Item Form Core
//!
//! DOM-free state handling behind the menu item form.

pub mod controller;
pub mod draft;
pub mod image;
pub mod normalize;
pub mod session;
pub mod variants;

pub use controller::{MenuItemFormController, MenuStore, Navigator, Notifier, SessionCell};
pub use draft::{DraftField, ImageSlot, MenuItemDraft, SpecialtyFlag, SpecialtyFlags};
pub use image::{ImageReads, ReadTicket};
pub use normalize::NormalizedItem;
pub use session::{FormMode, FormPhase, FormSession};
pub use variants::{VariantField, VariantList, VariantRecord};
