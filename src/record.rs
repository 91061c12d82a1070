use std::collections::HashMap;

use serde_json::Value;

use crate::Config;

/// Extracts (transaction id, item) pairs from map-shaped records using the
/// configured field names. Records missing either field are skipped; input
/// validation belongs to whoever produced the records.
pub fn pairs_from_maps<'a>(
    records: &'a [HashMap<String, String>],
    config: &Config,
) -> Vec<(&'a str, &'a str)> {
    records
        .iter()
        .filter_map(|record| {
            let transaction = record.get(&config.transaction_field)?;
            let product = record.get(&config.product_field)?;
            Some((transaction.as_str(), product.as_str()))
        })
        .collect()
}

/// Extracts (transaction id, item) pairs from JSON records. String and
/// numeric field values are both accepted; anything else skips the record.
pub fn pairs_from_json(records: &[Value], config: &Config) -> Vec<(String, String)> {
    records
        .iter()
        .filter_map(|record| {
            let transaction = field_to_string(record.get(&config.transaction_field)?)?;
            let product = field_to_string(record.get(&config.product_field)?)?;
            Some((transaction, product))
        })
        .collect()
}

fn field_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use serde_json::json;

    #[test]
    fn maps_use_configured_field_names() {
        let mut config = Config::new(0.5, 0.5);
        config.transaction_field = "order".to_string();
        config.product_field = "sku".to_string();

        let records = vec![
            hashmap! {
                "order".to_string() => "o1".to_string(),
                "sku".to_string() => "bread".to_string(),
            },
            hashmap! {
                "order".to_string() => "o2".to_string(),
                "sku".to_string() => "milk".to_string(),
            },
        ];

        assert_eq!(
            pairs_from_maps(&records, &config),
            vec![("o1", "bread"), ("o2", "milk")]
        );
    }

    #[test]
    fn maps_skip_records_missing_a_field() {
        let config = Config::new(0.5, 0.5);

        let records = vec![
            hashmap! {
                "transaction_id".to_string() => "t1".to_string(),
                "product".to_string() => "bread".to_string(),
            },
            hashmap! {
                "transaction_id".to_string() => "t2".to_string(),
            },
        ];

        assert_eq!(pairs_from_maps(&records, &config), vec![("t1", "bread")]);
    }

    #[test]
    fn json_accepts_string_and_numeric_fields() {
        let config = Config::new(0.5, 0.5);

        let records = vec![
            json!({ "transaction_id": 1, "product": "bread" }),
            json!({ "transaction_id": "t2", "product": "milk" }),
            json!({ "transaction_id": null, "product": "cheese" }),
        ];

        assert_eq!(
            pairs_from_json(&records, &config),
            vec![
                ("1".to_string(), "bread".to_string()),
                ("t2".to_string(), "milk".to_string()),
            ]
        );
    }
}
