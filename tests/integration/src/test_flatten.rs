//! Flattening and canonicalization across realistic parameter shapes.

#[cfg(test)]
mod tests {
    use mws_auth::{AuthError, ParameterValue, canonicalize, clean_str, flatten};
    use mws_request::params::{enumerate_keyed_param, enumerate_param};

    fn nested_example() -> ParameterValue {
        ParameterValue::map([
            ("a", ParameterValue::from(1)),
            (
                "c",
                ParameterValue::list([
                    ParameterValue::from("foo"),
                    ParameterValue::map([("what", "have")]),
                ]),
            ),
        ])
    }

    #[test]
    fn test_should_flatten_nested_example() {
        let flat = flatten(&nested_example(), "example").unwrap();
        let pairs: Vec<_> = flat.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("example.a", "1"),
                ("example.c.1", "foo"),
                ("example.c.2.what", "have"),
            ]
        );
    }

    #[test]
    fn test_should_sort_canonical_query_by_key() {
        let value = ParameterValue::map([("b", 1), ("a", 2)]);
        assert_eq!(canonicalize(&flatten(&value, "").unwrap()), "a=2&b=1");
    }

    #[test]
    fn test_should_drop_null_values() {
        let value = ParameterValue::map([
            ("a", ParameterValue::from(1)),
            ("b", ParameterValue::Null),
        ]);
        let flat = flatten(&value, "").unwrap();
        assert_eq!(flat.canonical_query(), "a=1");
    }

    #[test]
    fn test_should_emit_one_key_per_scalar_leaf() {
        let value = ParameterValue::map([
            (
                "Items",
                ParameterValue::list([
                    ParameterValue::map([("SellerSKU", "A"), ("Quantity", "1")]),
                    ParameterValue::map([("SellerSKU", "B"), ("Quantity", "2")]),
                ]),
            ),
            ("Flags", ParameterValue::list([true, false])),
            ("Note", ParameterValue::from("hello world")),
        ]);
        let flat = flatten(&value, "").unwrap();
        assert_eq!(flat.len(), value.leaf_count());
        assert_eq!(flat.len(), 7);
    }

    #[test]
    fn test_should_canonicalize_deterministically() {
        let value = nested_example();
        let first = flatten(&value, "example").unwrap().canonical_query();
        for _ in 0..10 {
            assert_eq!(flatten(&value, "example").unwrap().canonical_query(), first);
        }
    }

    #[test]
    fn test_should_detect_double_encoding() {
        for raw in ["a b", "2020-01-01T00:00:00+00:00", "café", "x/y"] {
            let once = clean_str(raw);
            assert_ne!(once, clean_str(&once), "{raw} should not survive re-encoding");
        }
        assert_eq!(clean_str("abc-_.~"), clean_str(&clean_str("abc-_.~")));
    }

    #[test]
    fn test_should_reject_colliding_paths() {
        let value = ParameterValue::map([
            ("a.b", ParameterValue::from(1)),
            ("a", ParameterValue::map([("b", 2)])),
        ]);
        assert_eq!(
            flatten(&value, ""),
            Err(AuthError::DuplicateKey("a.b".to_owned()))
        );
    }

    #[test]
    fn test_should_match_helpers_with_generic_flatten() {
        let via_helper =
            enumerate_param("MarketplaceIdList.Id", ParameterValue::list(["A1", "A2"])).unwrap();
        let via_flatten = flatten(
            &ParameterValue::map([(
                "MarketplaceIdList",
                ParameterValue::map([("Id", ParameterValue::list(["A1", "A2"]))]),
            )]),
            "",
        )
        .unwrap();
        assert_eq!(via_helper, via_flatten);

        let keyed =
            enumerate_keyed_param("Items.member", ParameterValue::map([("SellerSKU", "A")]))
                .unwrap();
        assert_eq!(keyed.get("Items.member.1.SellerSKU"), Some("A"));
    }

    #[test]
    fn test_should_flatten_json_documents() {
        let json = serde_json::json!({
            "ShipFromAddress": {"Name": "Warehouse 1", "CountryCode": "US"},
            "Items": [{"SellerSKU": "sku-1", "Quantity": 3}],
            "Comment": null,
        });
        let flat = flatten(&ParameterValue::from(json), "").unwrap();
        assert_eq!(flat.get("ShipFromAddress.Name"), Some("Warehouse%201"));
        assert_eq!(flat.get("Items.1.Quantity"), Some("3"));
        assert!(!flat.contains_key("Comment"));
    }
}
