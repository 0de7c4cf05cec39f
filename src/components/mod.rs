//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod image_upload_field;
mod menu_item_form;
mod reward_claims_panel;
mod shop_settings_page;
mod specialty_tag_set;
mod toast_stack;
mod variant_list_editor;

pub use confirm_button::ConfirmButton;
pub use image_upload_field::ImageUploadField;
pub use menu_item_form::MenuItemForm;
pub use reward_claims_panel::RewardClaimsPanel;
pub use shop_settings_page::ShopSettingsPage;
pub use specialty_tag_set::SpecialtyTagSet;
pub use toast_stack::ToastStack;
pub use variant_list_editor::VariantListEditor;

use leptos::prelude::*;

use crate::form::FormSession;

/// Form session of the mounted menu item form
pub type SessionSignal = RwSignal<FormSession<web_sys::File>, LocalStorage>;
