//! Shop Commands

use serde::Serialize;

use super::{call, call_optional, to_args};
use crate::models::ShopRecord;
use crate::settings::ShopSettingsPatch;

#[derive(Serialize)]
struct UsernameArgs<'a> {
    username: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateShopSettingsArgs<'a> {
    shop_id: &'a str,
    patch: &'a ShopSettingsPatch,
}

pub async fn fetch_shop_by_username(username: &str) -> Result<Option<ShopRecord>, String> {
    call_optional("fetch_shop_by_username", to_args(&UsernameArgs { username })?).await
}

pub async fn update_shop_settings(shop_id: &str, patch: &ShopSettingsPatch) -> Result<(), String> {
    call("update_shop_settings", to_args(&UpdateShopSettingsArgs { shop_id, patch })?).await?;
    Ok(())
}
