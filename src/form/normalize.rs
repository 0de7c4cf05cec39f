//! Submit Normalization
//!
//! Turns the text-based draft into the payload the store expects:
//! decimals parsed, empty promotional prices sent as `null`.

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::form::draft::MenuItemDraft;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedVariant {
    pub id: String,
    pub label: String,
    pub price: f64,
    pub promotional_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub promotional_price: Option<f64>,
    pub preparation_time: String,
    pub item_code: String,
    pub category: String,
    pub is_spicy: bool,
    pub is_chef_recommended: bool,
    pub is_popular: bool,
    pub has_allergens: bool,
    pub allergy_note: String,
    pub variants: Vec<NormalizedVariant>,
    /// Existing image kept when editing without picking a new file
    pub image_url: Option<String>,
}

/// Parse a required decimal field
pub fn parse_decimal(label: &str, text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AppError::Validation(format!("{} must be a valid amount, got \"{}\"", label, trimmed))),
    }
}

/// Parse an optional decimal field; blank text means absent
pub fn parse_optional_decimal(label: &str, text: &str) -> AppResult<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(label, text).map(Some)
}

fn require_text(label: &str, text: &str) -> AppResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}

/// Validate the draft and build the store payload.
///
/// `carry_image` keeps the current preview URL as the persisted image
/// reference when no new file was picked (edit mode).
pub fn normalize<F>(draft: &MenuItemDraft<F>, carry_image: bool) -> AppResult<NormalizedItem> {
    let title = require_text("Title", &draft.title)?;
    let description = require_text("Description", &draft.description)?;
    let price = parse_decimal("Price", &draft.price)?;
    let promotional_price = parse_optional_decimal("Promotional price", &draft.promotional_price)?;

    let variants = draft
        .variants
        .records()
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let n = index + 1;
            Ok(NormalizedVariant {
                id: variant.id.clone(),
                label: require_text(&format!("Variant {} label", n), &variant.label)?,
                price: parse_decimal(&format!("Variant {} price", n), &variant.price)?,
                promotional_price: parse_optional_decimal(
                    &format!("Variant {} promotional price", n),
                    &variant.promotional_price,
                )?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let image_url = if carry_image && draft.image.file.is_none() {
        draft.image.preview_url.clone()
    } else {
        None
    };

    Ok(NormalizedItem {
        title,
        description,
        price,
        promotional_price,
        preparation_time: draft.preparation_time.trim().to_string(),
        item_code: draft.item_code.trim().to_string(),
        category: draft.category.clone(),
        is_spicy: draft.flags.is_spicy,
        is_chef_recommended: draft.flags.is_chef_recommended,
        is_popular: draft.flags.is_popular,
        has_allergens: draft.flags.has_allergens,
        allergy_note: draft.allergy_note.trim().to_string(),
        variants,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::draft::ImageSlot;
    use crate::form::variants::VariantField;

    type Draft = MenuItemDraft<&'static str>;

    fn filled() -> Draft {
        let mut draft = Draft::for_category("Pizza");
        draft.title = "Margherita".into();
        draft.description = "Tomato, mozzarella".into();
        draft.price = "12.50".into();
        draft
    }

    #[test]
    fn test_price_parsed_and_blank_promo_is_null() {
        let item = normalize(&filled(), false).unwrap();

        assert_eq!(item.price, 12.5);
        assert_eq!(item.promotional_price, None);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["promotionalPrice"].is_null());
        assert_eq!(json["price"], serde_json::json!(12.5));
    }

    #[test]
    fn test_promo_parsed_when_present() {
        let mut draft = filled();
        draft.promotional_price = " 9.99 ".into();
        assert_eq!(normalize(&draft, false).unwrap().promotional_price, Some(9.99));
    }

    #[test]
    fn test_required_text_fields() {
        let mut draft = filled();
        draft.title = "   ".into();
        assert!(matches!(normalize(&draft, false), Err(AppError::Validation(msg)) if msg.contains("Title")));

        let mut draft = filled();
        draft.description = String::new();
        assert!(matches!(normalize(&draft, false), Err(AppError::Validation(msg)) if msg.contains("Description")));
    }

    #[test]
    fn test_bad_numbers_rejected() {
        for bad in ["", "abc", "12,5", "-3", "NaN", "inf"] {
            let mut draft = filled();
            draft.price = bad.into();
            assert!(normalize(&draft, false).is_err(), "price {:?} accepted", bad);
        }
        let mut draft = filled();
        draft.promotional_price = "cheap".into();
        assert!(normalize(&draft, false).is_err());
    }

    #[test]
    fn test_variants_validated_and_parsed() {
        let mut draft = filled();
        let id = draft.variants.add();
        assert!(matches!(normalize(&draft, false), Err(AppError::Validation(msg)) if msg.contains("Variant 1 label")));

        draft.variants.update(&id, VariantField::Label, "Large");
        assert!(matches!(normalize(&draft, false), Err(AppError::Validation(msg)) if msg.contains("Variant 1 price")));

        draft.variants.update(&id, VariantField::Price, "15");
        let item = normalize(&draft, false).unwrap();
        assert_eq!(item.variants.len(), 1);
        assert_eq!(item.variants[0].id, id);
        assert_eq!(item.variants[0].price, 15.0);
        assert_eq!(item.variants[0].promotional_price, None);
    }

    #[test]
    fn test_existing_image_carried_only_without_new_file() {
        let mut draft = filled();
        draft.image = ImageSlot::stored(Some("https://cdn/old.png".into()));
        assert_eq!(normalize(&draft, true).unwrap().image_url.as_deref(), Some("https://cdn/old.png"));
        assert_eq!(normalize(&draft, false).unwrap().image_url, None);

        draft.image.replace("new.png", "data:image/png;base64,AA".into());
        assert_eq!(normalize(&draft, true).unwrap().image_url, None);
    }
}
