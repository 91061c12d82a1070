use itertools::Itertools;
use serde::Serialize;

use crate::index::TransactionIndex;
use crate::support::itemset_support;
use crate::types::{round_to, ItemId, Itemset};
use crate::Config;

/// Decimal places kept on reported relative support.
pub const REL_SUPPORT_PRECISION: i32 = 4;

/// An itemset that met the support threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequentItemset {
    /// Sorted item ids.
    pub products: Itemset,
    /// Count of transactions containing all items.
    pub support: usize,
    /// `support / total transactions`, rounded.
    pub rel_support: f32,
}

/// Level-wise Apriori expansion.
///
/// Level k holds the accepted itemsets of k+1 items. Each level is joined
/// pairwise into candidates for the next; candidates surviving the
/// pre-filters get their support computed and land either in the next
/// accepted level or in the rejected collection for that level. The loop
/// stops once a level accepts nothing, so the returned levels are all
/// non-empty except possibly level 0.
///
/// Rejected sets are kept per level, append-only: level k+1's join prunes
/// against exactly the sets rejected at level k.
pub fn generate_itemsets(
    index: &TransactionIndex,
    config: &Config,
) -> (Vec<Vec<FrequentItemset>>, Vec<Vec<Itemset>>) {
    let mut rejected: Vec<Vec<Itemset>> = Vec::new();

    let mut levels = vec![seed_singletons(index, config, &mut rejected)];

    let mut k = 0;
    loop {
        let candidates = join_level(&levels[k], k, config, &mut rejected);
        if candidates.is_empty() {
            break;
        }

        let mut accepted = Vec::new();
        for products in candidates {
            let support = itemset_support(index, &products);
            let rel_support = relative_support(support, index.num_transactions());
            if rel_support < config.min_support {
                push_rejected(&mut rejected, k + 1, products);
                continue;
            }
            accepted.push(FrequentItemset {
                products,
                support,
                rel_support: round_to(rel_support, REL_SUPPORT_PRECISION),
            });
        }

        if accepted.is_empty() {
            break;
        }
        levels.push(accepted);
        k += 1;
    }

    (levels, rejected)
}

/// Level 0: every indexed item, filtered by support.
fn seed_singletons(
    index: &TransactionIndex,
    config: &Config,
    rejected: &mut Vec<Vec<Itemset>>,
) -> Vec<FrequentItemset> {
    let mut accepted = Vec::new();

    for (item, transactions) in index.items() {
        let support = transactions.len();
        let rel_support = relative_support(support, index.num_transactions());
        if rel_support < config.min_support {
            push_rejected(rejected, 0, vec![item]);
            continue;
        }
        accepted.push(FrequentItemset {
            products: vec![item],
            support,
            rel_support: round_to(rel_support, REL_SUPPORT_PRECISION),
        });
    }

    accepted
}

/// Joins every unordered pair of accepted level-k itemsets into level-(k+1)
/// candidates. A candidate pruned by the heuristic support-sum bound or by
/// rejection-subset containment is recorded as rejected at level k+1 and
/// never reaches support computation.
fn join_level(
    accepted: &[FrequentItemset],
    k: usize,
    config: &Config,
    rejected: &mut Vec<Vec<Itemset>>,
) -> Vec<Itemset> {
    let mut candidates = Vec::new();
    let mut newly_rejected: Vec<Itemset> = Vec::new();

    let prior_rejected = rejected.get(k).map(Vec::as_slice).unwrap_or(&[]);

    for (a, b) in accepted.iter().tuple_combinations() {
        let union: Itemset = a
            .products
            .iter()
            .merge(b.products.iter())
            .dedup()
            .copied()
            .collect();

        // Necessary-condition shortcut on the parents' summed support,
        // only for unions that grew by more than one item.
        if config.heuristic_join_bound
            && union.len() > k + 2
            && a.rel_support + b.rel_support < config.min_support
        {
            newly_rejected.push(union);
            continue;
        }

        // A superset of an infrequent set cannot be frequent. Level 0 has
        // nothing to check against.
        if k > 0
            && prior_rejected
                .iter()
                .any(|rejected_set| is_subset(rejected_set, &union))
        {
            newly_rejected.push(union);
            continue;
        }

        candidates.push(union);
    }

    for set in newly_rejected {
        push_rejected(rejected, k + 1, set);
    }

    candidates
}

fn relative_support(support: usize, num_transactions: usize) -> f32 {
    if num_transactions == 0 {
        return 0.0;
    }
    support as f32 / num_transactions as f32
}

fn is_subset(sub: &[ItemId], sup: &[ItemId]) -> bool {
    sub.iter().all(|item| sup.contains(item))
}

fn push_rejected(rejected: &mut Vec<Vec<Itemset>>, level: usize, set: Itemset) {
    while rejected.len() <= level {
        rejected.push(Vec::new());
    }
    rejected[level].push(set);
}
