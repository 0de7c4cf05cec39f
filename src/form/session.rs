//! Form Session
//!
//! State machine of one create/edit session:
//! `Initializing -> Creating | Editing -> Submitting -> Succeeded`, with a
//! failed submit returning to `Creating`/`Editing` with the draft intact.

use crate::error::{AppError, AppResult};
use crate::form::draft::MenuItemDraft;
use crate::form::normalize::{normalize, NormalizedItem};
use crate::models::{ItemRecord, ShopRecord};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// New item, optionally pre-filed under a category picked before
    Create { category: Option<String> },
    Edit { item_id: String },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Initializing,
    Creating,
    Editing,
    Submitting,
    Succeeded,
}

/// Where a submit goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create { shop_id: String },
    Update { item_id: String },
}

/// Everything the store needs for one create/update call
#[derive(Debug, Clone)]
pub struct SubmitRequest<F> {
    pub target: SubmitTarget,
    pub item: NormalizedItem,
    pub image: Option<F>,
    /// Where to go once the save succeeded
    pub menu_route: Route,
}

#[derive(Debug, Clone)]
pub struct FormSession<F> {
    mode: FormMode,
    phase: FormPhase,
    shop: Option<ShopRecord>,
    draft: MenuItemDraft<F>,
}

impl<F: Clone> FormSession<F> {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            phase: FormPhase::Initializing,
            shop: None,
            draft: MenuItemDraft::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn shop(&self) -> Option<&ShopRecord> {
        self.shop.as_ref()
    }

    pub fn draft(&self) -> &MenuItemDraft<F> {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MenuItemDraft<F> {
        &mut self.draft
    }

    /// Shop context arrived. Create mode is usable right away; edit mode
    /// waits for the item.
    pub fn attach_shop(&mut self, shop: ShopRecord) {
        self.shop = Some(shop);
        if let FormMode::Create { category } = &self.mode {
            self.draft = MenuItemDraft::for_category(category.clone().unwrap_or_default());
            self.phase = FormPhase::Creating;
        }
    }

    /// Stored item arrived (edit mode)
    pub fn populate(&mut self, record: ItemRecord) {
        self.draft = MenuItemDraft::from_record(record);
        self.phase = FormPhase::Editing;
    }

    /// Change the category; in create mode returns the route that restarts
    /// the create flow under the new category.
    pub fn change_category(&mut self, category: &str) -> Option<Route> {
        self.draft.category = category.to_string();
        match (&self.mode, &self.shop) {
            (FormMode::Create { .. }, Some(shop)) => Some(Route::NewItem {
                username: shop.username.clone(),
                category: Some(category.to_string()).filter(|c| !c.is_empty()),
            }),
            _ => None,
        }
    }

    /// Validate, normalize and move to `Submitting`
    pub fn begin_submit(&mut self) -> AppResult<SubmitRequest<F>> {
        match self.phase {
            FormPhase::Creating | FormPhase::Editing => {}
            FormPhase::Submitting => return Err(AppError::Conflict("item is already being saved".into())),
            FormPhase::Initializing | FormPhase::Succeeded => {
                return Err(AppError::Conflict("form is not ready".into()))
            }
        }
        let shop = self
            .shop
            .as_ref()
            .ok_or_else(|| AppError::NotFound("shop is not loaded".into()))?;

        let item = normalize(&self.draft, self.mode.is_edit())?;
        let target = match &self.mode {
            FormMode::Create { .. } => SubmitTarget::Create { shop_id: shop.id.clone() },
            FormMode::Edit { item_id } => SubmitTarget::Update { item_id: item_id.clone() },
        };
        let request = SubmitRequest {
            target,
            item,
            image: self.draft.image.file.clone(),
            menu_route: Route::Menu { username: shop.username.clone() },
        };
        self.phase = FormPhase::Submitting;
        Ok(request)
    }

    /// Store answered
    pub fn finish_submit(&mut self, succeeded: bool) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = if succeeded {
            FormPhase::Succeeded
        } else if self.mode.is_edit() {
            FormPhase::Editing
        } else {
            FormPhase::Creating
        };
    }
}
