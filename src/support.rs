use crate::index::TransactionIndex;
use crate::types::{ItemId, TransactionId};

/// Number of distinct transactions containing every item of the set.
///
/// Starts from the first item's transaction list and intersects with each
/// subsequent item's list. The index keeps per-item lists duplicate-free,
/// so the running list stays duplicate-free and its length is the support.
/// An item absent from the index has zero support, and so does the set.
pub fn itemset_support(index: &TransactionIndex, itemset: &[ItemId]) -> usize {
    let mut transactions: Vec<TransactionId> = Vec::new();

    for (i, &item) in itemset.iter().enumerate() {
        let list = match index.transactions_of(item) {
            Some(list) => list,
            None => return 0,
        };

        if i == 0 {
            transactions.extend_from_slice(list);
        } else {
            transactions.retain(|transaction| list.contains(transaction));
        }
    }

    transactions.len()
}
