//! Item Commands
//!
//! Create/update send the normalized item plus, when the owner picked a new
//! picture, the raw file under `image` for the store to upload.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_optional, to_args};
use crate::form::NormalizedItem;
use crate::models::ItemRecord;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemIdArgs<'a> {
    item_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateItemArgs<'a> {
    shop_id: &'a str,
    item: &'a NormalizedItem,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateItemArgs<'a> {
    item_id: &'a str,
    item: &'a NormalizedItem,
}

fn with_image(args: JsValue, image: Option<&web_sys::File>) -> Result<JsValue, String> {
    if let Some(file) = image {
        js_sys::Reflect::set(&args, &JsValue::from_str("image"), file)
            .map_err(|_| "could not attach image".to_string())?;
    }
    Ok(args)
}

// ========================
// Commands
// ========================

pub async fn fetch_item(item_id: &str) -> Result<Option<ItemRecord>, String> {
    call_optional("fetch_item", to_args(&ItemIdArgs { item_id })?).await
}

pub async fn create_item(shop_id: &str, item: &NormalizedItem, image: Option<&web_sys::File>) -> Result<(), String> {
    let js_args = with_image(to_args(&CreateItemArgs { shop_id, item })?, image)?;
    call("create_item", js_args).await?;
    Ok(())
}

pub async fn update_item(item_id: &str, item: &NormalizedItem, image: Option<&web_sys::File>) -> Result<(), String> {
    let js_args = with_image(to_args(&UpdateItemArgs { item_id, item })?, image)?;
    call("update_item", js_args).await?;
    Ok(())
}
