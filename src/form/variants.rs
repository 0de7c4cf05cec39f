//! Variant List
//!
//! Ordered price variants of one draft. Order is display order.

use std::collections::HashSet;

use crate::models::StoredVariant;

/// One editable price variant. Prices stay as typed until submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantRecord {
    pub id: String,
    pub label: String,
    pub price: String,
    pub promotional_price: String,
}

/// Editable field of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantField {
    Label,
    Price,
    PromotionalPrice,
}

impl VariantRecord {
    pub fn get(&self, field: VariantField) -> &str {
        match field {
            VariantField::Label => &self.label,
            VariantField::Price => &self.price,
            VariantField::PromotionalPrice => &self.promotional_price,
        }
    }

    fn set(&mut self, field: VariantField, value: String) {
        match field {
            VariantField::Label => self.label = value,
            VariantField::Price => self.price = value,
            VariantField::PromotionalPrice => self.promotional_price = value,
        }
    }
}

/// Variant sequence plus the identifier generator for it.
///
/// Every identifier ever present in the list, loaded or generated, stays in
/// `issued` for the lifetime of the draft and is never handed out again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantList {
    records: Vec<VariantRecord>,
    issued: HashSet<String>,
    next_seq: u64,
}

impl VariantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored variants. Records without an id, or repeating an
    /// id seen earlier in the list, get a fresh one.
    pub fn from_stored(stored: Vec<StoredVariant>) -> Self {
        let mut list = Self::new();
        for variant in stored {
            let id = match variant.id.map(|id| id.trim().to_string()) {
                Some(id) if !id.is_empty() && list.issued.insert(id.clone()) => id,
                _ => list.fresh_id(),
            };
            list.records.push(VariantRecord {
                id,
                label: variant.label,
                price: variant.price.map(|p| p.to_string()).unwrap_or_default(),
                promotional_price: variant.promotional_price.map(|p| p.to_string()).unwrap_or_default(),
            });
        }
        list
    }

    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|v| v.id == id)
    }

    /// Append an empty variant, returning its id
    pub fn add(&mut self) -> String {
        let id = self.fresh_id();
        self.records.push(VariantRecord {
            id: id.clone(),
            ..Default::default()
        });
        id
    }

    /// Drop the variant with `id`. Unknown ids leave the list untouched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|v| v.id != id);
        self.records.len() != before
    }

    /// Replace one field of one variant
    pub fn update(&mut self, id: &str, field: VariantField, value: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|v| v.id == id) {
            Some(variant) => {
                variant.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Move the variant with `id` into drop slot `slot` (see `leptos_dragdrop::resolve_move`)
    pub fn move_to(&mut self, id: &str, slot: usize) -> bool {
        let Some(from) = self.position(id) else { return false };
        let Some(to) = leptos_dragdrop::resolve_move(from, slot, self.records.len()) else { return false };
        let record = self.records.remove(from);
        self.records.insert(to, record);
        true
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_seq += 1;
            let id = format!("variant-{}", self.next_seq);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}
