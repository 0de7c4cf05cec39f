//! Menu Item Draft
//!
//! In-memory, not-yet-persisted state of one create/edit session.

use crate::form::variants::VariantList;
use crate::icons::Icon;
use crate::models::ItemRecord;

/// Dietary/specialty flags rendered as toggle tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialtyFlag {
    Spicy,
    ChefRecommended,
    Popular,
    HasAllergens,
}

impl SpecialtyFlag {
    pub const ALL: [SpecialtyFlag; 4] = [
        SpecialtyFlag::Spicy,
        SpecialtyFlag::ChefRecommended,
        SpecialtyFlag::Popular,
        SpecialtyFlag::HasAllergens,
    ];

    /// Field name in the stored document
    pub fn key(self) -> &'static str {
        match self {
            SpecialtyFlag::Spicy => "isSpicy",
            SpecialtyFlag::ChefRecommended => "isChefRecommended",
            SpecialtyFlag::Popular => "isPopular",
            SpecialtyFlag::HasAllergens => "hasAllergens",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialtyFlag::Spicy => "Spicy",
            SpecialtyFlag::ChefRecommended => "Chef's pick",
            SpecialtyFlag::Popular => "Popular",
            SpecialtyFlag::HasAllergens => "Contains allergens",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            SpecialtyFlag::Spicy => Icon::Spicy,
            SpecialtyFlag::ChefRecommended => Icon::ChefRecommended,
            SpecialtyFlag::Popular => Icon::Popular,
            SpecialtyFlag::HasAllergens => Icon::Allergens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecialtyFlags {
    pub is_spicy: bool,
    pub is_chef_recommended: bool,
    pub is_popular: bool,
    pub has_allergens: bool,
}

impl SpecialtyFlags {
    pub fn get(&self, flag: SpecialtyFlag) -> bool {
        match flag {
            SpecialtyFlag::Spicy => self.is_spicy,
            SpecialtyFlag::ChefRecommended => self.is_chef_recommended,
            SpecialtyFlag::Popular => self.is_popular,
            SpecialtyFlag::HasAllergens => self.has_allergens,
        }
    }

    pub fn set(&mut self, flag: SpecialtyFlag, value: bool) {
        let slot = match flag {
            SpecialtyFlag::Spicy => &mut self.is_spicy,
            SpecialtyFlag::ChefRecommended => &mut self.is_chef_recommended,
            SpecialtyFlag::Popular => &mut self.is_popular,
            SpecialtyFlag::HasAllergens => &mut self.has_allergens,
        };
        *slot = value;
    }
}

/// Image attached to the draft.
///
/// `file` is only set when a new image was picked in this session;
/// `preview_url` is set whenever any image (stored or new) is present.
#[derive(Debug, Clone)]
pub struct ImageSlot<F> {
    pub file: Option<F>,
    pub preview_url: Option<String>,
}

impl<F> Default for ImageSlot<F> {
    fn default() -> Self {
        Self { file: None, preview_url: None }
    }
}

impl<F> ImageSlot<F> {
    pub fn stored(url: Option<String>) -> Self {
        Self {
            file: None,
            preview_url: url.filter(|u| !u.is_empty()),
        }
    }

    pub fn replace(&mut self, file: F, data_url: String) {
        self.file = Some(file);
        self.preview_url = Some(data_url);
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.preview_url = None;
    }

    pub fn has_image(&self) -> bool {
        self.preview_url.is_some()
    }
}

/// Free-text fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Price,
    PromotionalPrice,
    PreparationTime,
    ItemCode,
    AllergyNote,
}

#[derive(Debug, Clone)]
pub struct MenuItemDraft<F> {
    pub title: String,
    pub description: String,
    pub price: String,
    /// Empty means no promotion
    pub promotional_price: String,
    /// Free text, e.g. "15-20"
    pub preparation_time: String,
    pub item_code: String,
    pub category: String,
    pub flags: SpecialtyFlags,
    pub allergy_note: String,
    pub image: ImageSlot<F>,
    pub variants: VariantList,
}

impl<F> Default for MenuItemDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            promotional_price: String::new(),
            preparation_time: String::new(),
            item_code: String::new(),
            category: String::new(),
            flags: SpecialtyFlags::default(),
            allergy_note: String::new(),
            image: ImageSlot::default(),
            variants: VariantList::new(),
        }
    }
}

impl<F> MenuItemDraft<F> {
    /// Empty draft filed under `category`
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    /// Editable copy of a stored item
    pub fn from_record(record: ItemRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            price: record.price.map(|p| p.to_string()).unwrap_or_default(),
            promotional_price: record.promotional_price.map(|p| p.to_string()).unwrap_or_default(),
            preparation_time: record.preparation_time,
            item_code: record.item_code,
            category: record.category,
            flags: SpecialtyFlags {
                is_spicy: record.is_spicy,
                is_chef_recommended: record.is_chef_recommended,
                is_popular: record.is_popular,
                has_allergens: record.has_allergens,
            },
            allergy_note: record.allergy_note.unwrap_or_default(),
            image: ImageSlot::stored(record.image_url),
            variants: VariantList::from_stored(record.variants),
        }
    }

    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::PromotionalPrice => &self.promotional_price,
            DraftField::PreparationTime => &self.preparation_time,
            DraftField::ItemCode => &self.item_code,
            DraftField::AllergyNote => &self.allergy_note,
        }
    }

    pub fn set_text(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
            DraftField::PromotionalPrice => self.promotional_price = value,
            DraftField::PreparationTime => self.preparation_time = value,
            DraftField::ItemCode => self.item_code = value,
            DraftField::AllergyNote => self.allergy_note = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Draft = MenuItemDraft<()>;

    #[test]
    fn test_record_without_variants_yields_empty_list() {
        let record: ItemRecord = serde_json::from_str(r#"{"id":"i1","title":"Soup","price":6}"#).unwrap();
        let draft = Draft::from_record(record);

        assert!(draft.variants.is_empty());
        assert_eq!(draft.price, "6");
    }

    #[test]
    fn test_absent_flags_default_to_false() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"title":"Curry","description":"Hot","price":12.5,"isSpicy":true}"#,
        )
        .unwrap();
        let draft = Draft::from_record(record);

        assert!(draft.flags.is_spicy);
        assert!(!draft.flags.has_allergens);
        assert!(!draft.flags.is_popular);
        assert_eq!(draft.allergy_note, "");
        assert_eq!(draft.promotional_price, "");
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"id":"i1","title":"Soup","price":6,"isSpicy":null,"hasAllergens":null,
                "allergyNote":null,"preparationTime":null,"itemCode":null,
                "variants":[{"label":null,"price":2}]}"#,
        )
        .unwrap();
        let draft = Draft::from_record(record);

        assert!(!draft.flags.is_spicy);
        assert!(!draft.flags.has_allergens);
        assert_eq!(draft.allergy_note, "");
        assert_eq!(draft.preparation_time, "");
        assert_eq!(draft.item_code, "");
        assert_eq!(draft.variants.records()[0].label, "");

        let bare: ItemRecord = serde_json::from_str(r#"{"title":"Tea","variants":null}"#).unwrap();
        assert!(bare.variants.is_empty());
    }

    #[test]
    fn test_numbers_become_text() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"title":"Pizza","price":12.5,"promotionalPrice":10,"imageUrl":"https://cdn/p.png",
                "variants":[{"label":"Large","price":15.75}]}"#,
        )
        .unwrap();
        let draft = Draft::from_record(record);

        assert_eq!(draft.price, "12.5");
        assert_eq!(draft.promotional_price, "10");
        assert_eq!(draft.image.preview_url.as_deref(), Some("https://cdn/p.png"));
        assert!(draft.image.file.is_none());
        assert_eq!(draft.variants.records()[0].price, "15.75");
        assert!(!draft.variants.records()[0].id.is_empty());
    }

    #[test]
    fn test_flag_toggle_roundtrip() {
        let mut flags = SpecialtyFlags::default();
        for flag in SpecialtyFlag::ALL {
            flags.set(flag, true);
            assert!(flags.get(flag));
        }
        flags.set(SpecialtyFlag::Popular, false);
        assert!(!flags.is_popular);
        assert!(flags.is_spicy);
    }

    #[test]
    fn test_set_text_targets_one_field() {
        let mut draft = Draft::for_category("Mains");
        draft.set_text(DraftField::Title, "Ramen");
        draft.set_text(DraftField::PreparationTime, "15-20");

        assert_eq!(draft.text(DraftField::Title), "Ramen");
        assert_eq!(draft.preparation_time, "15-20");
        assert_eq!(draft.description, "");
        assert_eq!(draft.category, "Mains");
    }
}
