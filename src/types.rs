use std::collections::HashMap;

pub type ItemId = usize;
pub type TransactionId = usize;

/// Sorted, duplicate-free list of item ids.
pub type Itemset = Vec<ItemId>;

/// Item id back to the raw item name it was interned from.
pub type Inventory = Vec<String>;
pub type ReverseLookup = HashMap<String, ItemId>;

/// Per-item list of the transactions containing it, in first-seen order.
/// Indexed by `ItemId`; the single source of truth for support computation.
pub type ItemIndex = Vec<Vec<TransactionId>>;

/// Round to a fixed number of decimal places, the precision reported for
/// relative support and confidence. Threshold comparisons always use the
/// unrounded value.
pub fn round_to(value: f32, digits: i32) -> f32 {
    let factor = 10f32.powi(digits);
    (value * factor).round() / factor
}
