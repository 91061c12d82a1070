use std::collections::{HashMap, HashSet};

use crate::types::{Inventory, ItemId, ItemIndex, ReverseLookup, TransactionId};

/// Inverted index over the input transactions.
///
/// Raw transaction and item identifiers are interned to dense `usize` ids.
/// The per-transaction membership map only exists while building; what is
/// kept is the per-item transaction lists and the distinct transaction
/// count. Immutable after construction.
#[derive(Debug)]
pub struct TransactionIndex {
    item_transactions: ItemIndex,
    inventory: Inventory,
    reverse_lookup: ReverseLookup,
    num_transactions: usize,
}

impl TransactionIndex {
    /// Builds the index from a flat sequence of (transaction id, item id)
    /// pairs. No ordering requirement; a duplicate pair records its
    /// transaction at most once per item, so duplicates never inflate
    /// support.
    pub fn build<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut transaction_lookup: HashMap<String, TransactionId> = HashMap::new();
        let mut reverse_lookup: ReverseLookup = HashMap::new();
        let mut inventory: Inventory = Vec::new();
        let mut item_transactions: ItemIndex = Vec::new();

        // Membership map, only consulted while building.
        let mut membership: HashMap<TransactionId, HashSet<ItemId>> = HashMap::new();

        for (transaction, item) in pairs {
            let transaction = transaction.as_ref();
            let item = item.as_ref();

            let transaction_id = match transaction_lookup.get(transaction) {
                Some(&id) => id,
                None => {
                    let id = transaction_lookup.len();
                    transaction_lookup.insert(transaction.to_string(), id);
                    id
                }
            };

            let item_id = match reverse_lookup.get(item) {
                Some(&id) => id,
                None => {
                    let id = inventory.len();
                    reverse_lookup.insert(item.to_string(), id);
                    inventory.push(item.to_string());
                    item_transactions.push(Vec::new());
                    id
                }
            };

            if membership.entry(transaction_id).or_default().insert(item_id) {
                item_transactions[item_id].push(transaction_id);
            }
        }

        let num_transactions = membership.len();

        TransactionIndex {
            item_transactions,
            inventory,
            reverse_lookup,
            num_transactions,
        }
    }

    /// Number of distinct transactions observed.
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.item_transactions.len()
    }

    /// Transactions containing the item, in first-seen order.
    pub fn transactions_of(&self, item: ItemId) -> Option<&[TransactionId]> {
        self.item_transactions.get(item).map(Vec::as_slice)
    }

    /// All items with their transaction lists, in item-id order.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &[TransactionId])> {
        self.item_transactions
            .iter()
            .enumerate()
            .map(|(id, transactions)| (id, transactions.as_slice()))
    }

    pub fn item_name(&self, item: ItemId) -> Option<&str> {
        self.inventory.get(item).map(String::as_str)
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_items_in_first_seen_order() {
        let index = TransactionIndex::build(vec![
            ("t1", "bread"),
            ("t1", "milk"),
            ("t2", "milk"),
        ]);

        assert_eq!(index.num_items(), 2);
        assert_eq!(index.item_id("bread"), Some(0));
        assert_eq!(index.item_id("milk"), Some(1));
        assert_eq!(index.item_name(1), Some("milk"));
        assert_eq!(index.item_name(2), None);
    }

    #[test]
    fn counts_distinct_transactions() {
        let index = TransactionIndex::build(vec![
            ("t1", "bread"),
            ("t2", "bread"),
            ("t1", "milk"),
            ("t3", "cheese"),
        ]);

        assert_eq!(index.num_transactions(), 3);
    }

    #[test]
    fn records_transactions_per_item() {
        let index = TransactionIndex::build(vec![
            ("t1", "bread"),
            ("t2", "milk"),
            ("t2", "bread"),
        ]);

        assert_eq!(index.transactions_of(0), Some(&[0, 1][..]));
        assert_eq!(index.transactions_of(1), Some(&[1][..]));
        assert_eq!(index.transactions_of(5), None);
    }

    #[test]
    fn duplicate_pairs_do_not_inflate_support() {
        let index = TransactionIndex::build(vec![
            ("t1", "bread"),
            ("t1", "bread"),
            ("t1", "bread"),
        ]);

        assert_eq!(index.num_transactions(), 1);
        assert_eq!(index.transactions_of(0), Some(&[0][..]));
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = TransactionIndex::build(Vec::<(&str, &str)>::new());

        assert_eq!(index.num_transactions(), 0);
        assert_eq!(index.num_items(), 0);
    }
}
