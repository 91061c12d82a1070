use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::index::TransactionIndex;
use crate::itemset::FrequentItemset;
use crate::support::itemset_support;
use crate::types::{round_to, ItemId, Itemset};

/// Decimal places kept on reported confidence.
pub const CONFIDENCE_PRECISION: i32 = 2;

/// `left ⇒ right` with a single right-hand item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub left: Itemset,
    pub right: ItemId,
    /// `support(left ∪ {right}) / support(left)`, rounded.
    pub confidence: f32,
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:?} => {} (conf {})",
            self.left, self.right, self.confidence
        )
    }
}

/// Derives rules from every accepted itemset of two or more items: one
/// candidate rule per choice of right-hand item, with the rest of the set
/// as the left-hand side. Confidence must strictly exceed `min_conf`.
///
/// Rules are not deduplicated across itemsets: distinct accepted sets that
/// produce the same (left, right) split each emit their own rule.
pub fn generate_rules(
    levels: &[Vec<FrequentItemset>],
    index: &TransactionIndex,
    min_conf: f32,
) -> Vec<Rule> {
    let mut rules = Vec::new();

    for level in levels {
        for set in level {
            if set.products.len() < 2 {
                continue;
            }

            for (i, &right) in set.products.iter().enumerate() {
                // Fresh left-hand set excluding one position, never an
                // in-place removal.
                let left: Itemset = set
                    .products
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &product)| product)
                    .collect();

                let left_support = itemset_support(index, &left);
                if left_support == 0 {
                    continue;
                }

                let confidence = set.support as f32 / left_support as f32;
                if confidence > min_conf {
                    rules.push(Rule {
                        left,
                        right,
                        confidence: round_to(confidence, CONFIDENCE_PRECISION),
                    });
                }
            }
        }
    }

    rules
}
