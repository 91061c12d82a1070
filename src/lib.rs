//! Apriori frequent-itemset and association-rule mining.
//!
//! Input is a flat list of (transaction id, item) pairs. The run builds an
//! inverted index, expands frequent itemsets level by level with
//! rejection-subset pruning, and derives single-consequent rules filtered
//! by confidence. Everything is computed once, in memory, and exposed as
//! read-only results.
//!
//! ```
//! use arules::{Apriori, Config};
//!
//! let pairs = vec![("t1", "bread"), ("t1", "milk"), ("t2", "bread")];
//! let apriori = Apriori::new(pairs, Config::new(0.5, 0.5));
//!
//! assert_eq!(apriori.sets().len(), 2);
//! assert_eq!(apriori.rules().len(), 1);
//! ```

pub mod index;
pub mod itemset;
pub mod record;
pub mod rules;
pub mod support;
pub mod types;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::index::TransactionIndex;
pub use crate::itemset::FrequentItemset;
pub use crate::rules::Rule;
pub use crate::types::{ItemId, Itemset, TransactionId};

use crate::itemset::generate_itemsets;
use crate::rules::generate_rules;

/// Thresholds and field selectors, fixed for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum relative support in (0, 1].
    pub min_support: f32,
    /// Minimum confidence; rules must strictly exceed it.
    pub min_conf: f32,
    /// Record field holding the transaction identifier.
    pub transaction_field: String,
    /// Record field holding the item identifier.
    pub product_field: String,
    /// Support-sum shortcut applied to joined candidates that grew by more
    /// than one item. Not an exact Apriori bound; turn off for strict join
    /// semantics.
    pub heuristic_join_bound: bool,
}

impl Config {
    pub fn new(min_support: f32, min_conf: f32) -> Self {
        Config {
            min_support,
            min_conf,
            transaction_field: "transaction_id".to_string(),
            product_field: "product".to_string(),
            heuristic_join_bound: true,
        }
    }
}

/// One full Apriori run over a transaction list.
///
/// Construction does all the work: index, level-wise itemset expansion,
/// rule derivation. The result is read-only; a new input needs a fresh run.
#[derive(Debug)]
pub struct Apriori {
    config: Config,
    index: TransactionIndex,
    sets: Vec<Vec<FrequentItemset>>,
    rejected: Vec<Vec<Itemset>>,
    rules: Vec<Rule>,
}

impl Apriori {
    /// Runs the algorithm on (transaction id, item) pairs.
    pub fn new<I, S>(pairs: I, config: Config) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let index = TransactionIndex::build(pairs);
        let (sets, rejected) = generate_itemsets(&index, &config);
        let rules = generate_rules(&sets, &index, config.min_conf);

        Apriori {
            config,
            index,
            sets,
            rejected,
            rules,
        }
    }

    /// Runs the algorithm on map-shaped records, selecting fields named by
    /// the config.
    pub fn from_maps(records: &[HashMap<String, String>], config: Config) -> Self {
        let pairs = record::pairs_from_maps(records, &config);
        Self::new(pairs, config)
    }

    /// Runs the algorithm on JSON records, selecting fields named by the
    /// config.
    pub fn from_json(records: &[Value], config: Config) -> Self {
        let pairs = record::pairs_from_json(records, &config);
        Self::new(pairs, config)
    }

    /// Accepted itemsets grouped by level; level k holds sets of k+1 items.
    pub fn sets(&self) -> &[Vec<FrequentItemset>] {
        &self.sets
    }

    /// Itemsets that failed a threshold or were pruned, grouped by the
    /// level they were rejected at.
    pub fn rejected_sets(&self) -> &[Vec<Itemset>] {
        &self.rejected
    }

    /// Rules whose confidence strictly exceeds `min_conf`.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying inverted index, e.g. for resolving item ids back to
    /// names.
    pub fn index(&self) -> &TransactionIndex {
        &self.index
    }
}
