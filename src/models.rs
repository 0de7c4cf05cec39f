//! Frontend Models
//!
//! Data structures matching the documents held by the external store.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shop document (looked up by its public username)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    /// Fixed category list menu items are filed under
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub company_info: CompanyInfo,
}

/// Menu item document as stored. Older documents may miss any optional field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub promotional_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preparation_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_spicy: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_chef_recommended: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_popular: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_allergens: bool,
    #[serde(default)]
    pub allergy_note: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<StoredVariant>,
}

/// Price variant as stored inside an item document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredVariant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub promotional_price: Option<f64>,
}

/// Social-media links shown on the public shop page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Company details shown in the shop footer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
}

/// Reward claim lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A customer's request to redeem a shop reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardClaim {
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub reward_title: String,
    #[serde(default)]
    pub points_cost: u32,
    #[serde(default)]
    pub status: ClaimStatus,
    /// Unix millis
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-visible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}
