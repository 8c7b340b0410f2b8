//! Full request preparation: defaults, flattening, signing, and URL assembly.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::Method;
    use mws_auth::{FlatParams, ParameterValue, flatten};
    use mws_core::{Marketplace, MwsConfig};
    use mws_request::params::{enumerate_param, enumerate_params};
    use mws_request::{RequestBuilder, RequestError, calc_md5};

    use crate::{feeds_api, fixed_time, orders_api, test_builder, test_config};

    const EXPECTED_QUERY: &str = "AWSAccessKeyId=AKID&Action=ListOrders\
        &CreatedAfter=2020-01-01&MarketplaceId.Id.1=ATVPDKIKX0DER&SellerId=SELLER\
        &SignatureMethod=HmacSHA256&SignatureVersion=2\
        &Timestamp=2020-01-02T03%3A04%3A05%2B00%3A00&Version=2013-09-01";

    fn list_orders_params() -> FlatParams {
        let mut params =
            enumerate_param("MarketplaceId.Id", Marketplace::Us.marketplace_id()).unwrap();
        params.set("CreatedAfter", &ParameterValue::from("2020-01-01")).unwrap();
        params
    }

    #[test]
    fn test_should_sign_list_orders_end_to_end() {
        let builder = test_builder(orders_api());
        let prepared = builder
            .prepare_at("ListOrders", list_orders_params(), Method::POST, fixed_time())
            .unwrap();

        assert_eq!(prepared.canonical_query, EXPECTED_QUERY);
        assert_eq!(prepared.signature, "yQ3D613g6FE+ziAD8pV2vpF9BIpYZJTblJhVSiRPmqE=");
        assert_eq!(
            prepared.url,
            format!(
                "https://mws.amazonservices.com/Orders/2013-09-01?{EXPECTED_QUERY}\
                 &Signature=yQ3D613g6FE%2BziAD8pV2vpF9BIpYZJTblJhVSiRPmqE%3D"
            )
        );
    }

    #[test]
    fn test_should_sign_same_request_from_generic_params() {
        let builder = test_builder(orders_api());
        let generic = ParameterValue::map([
            (
                "MarketplaceId",
                ParameterValue::map([("Id", ParameterValue::list(["ATVPDKIKX0DER"]))]),
            ),
            ("CreatedAfter", ParameterValue::from("2020-01-01")),
            ("LastUpdatedAfter", ParameterValue::Null),
        ]);
        let flat = flatten(&generic, "").unwrap();
        let prepared = builder
            .prepare_at("ListOrders", flat, Method::POST, fixed_time())
            .unwrap();
        assert_eq!(prepared.canonical_query, EXPECTED_QUERY);
    }

    #[test]
    fn test_should_verify_signature_of_prepared_request() {
        let builder = test_builder(orders_api());
        let prepared = builder
            .prepare_at("ListOrders", list_orders_params(), Method::POST, fixed_time())
            .unwrap();
        assert!(
            builder
                .verify(&Method::POST, &prepared.params, &prepared.signature)
                .unwrap()
        );

        let mut tampered = prepared.params.clone();
        tampered
            .set("CreatedAfter", &ParameterValue::from("2019-01-01"))
            .unwrap();
        assert!(
            !builder
                .verify(&Method::POST, &tampered, &prepared.signature)
                .unwrap()
        );
    }

    #[test]
    fn test_should_prepare_feed_submission_with_body() {
        let builder = test_builder(feeds_api());
        let mut params = enumerate_params([
            ("MarketplaceIdList.Id", ParameterValue::list(["ATVPDKIKX0DER"])),
            ("PurgeAndReplace", ParameterValue::Null),
        ])
        .unwrap();
        params
            .set("FeedType", &ParameterValue::from("_POST_FLAT_FILE_LISTINGS_DATA_"))
            .unwrap();

        let body = Bytes::from_static(b"sku\tprice\nabc\t9.99\n");
        let prepared = builder
            .prepare_at("SubmitFeed", params, Method::POST, fixed_time())
            .unwrap()
            .with_body(body.clone(), "text/tab-separated-values; charset=iso-8859-1")
            .unwrap();

        assert_eq!(prepared.params.get("Merchant"), Some("SELLER"));
        assert!(!prepared.params.contains_key("SellerId"));
        assert_eq!(prepared.params.get("Version"), Some("2009-01-01"));

        let request = prepared.into_http().unwrap();
        assert_eq!(request.uri().path(), "/");
        assert_eq!(request.headers()["content-md5"], calc_md5(&body).as_str());
        assert_eq!(request.body(), &body);
    }

    #[test]
    fn test_should_paginate_with_next_token() {
        let builder = test_builder(feeds_api());
        let prepared = builder
            .by_next_token("GetFeedSubmissionList", "2YgYW55IGNhcm5hbCBwbGVhcw==")
            .unwrap();
        assert_eq!(prepared.method, Method::POST);
        assert_eq!(
            prepared.params.get("Action"),
            Some("GetFeedSubmissionListByNextToken")
        );
        assert_eq!(
            prepared.params.get("NextToken"),
            Some("2YgYW55IGNhcm5hbCBwbGVhcw%3D%3D")
        );

        assert!(matches!(
            builder.by_next_token("SubmitFeed", "token"),
            Err(RequestError::UnsupportedNextToken(_))
        ));
    }

    #[test]
    fn test_should_use_regional_endpoint() {
        let config = MwsConfig {
            region: Marketplace::De,
            ..test_config()
        };
        let builder = RequestBuilder::new(&config, orders_api()).unwrap();
        let prepared = builder.service_status().unwrap();
        assert!(
            prepared
                .url
                .starts_with("https://mws-eu.amazonservices.com/Orders/2013-09-01?")
        );
    }

    #[test]
    fn test_should_include_auth_token_when_configured() {
        let config = MwsConfig {
            auth_token: Some("amzn.mws.4ea38b7b".to_owned()),
            ..test_config()
        };
        let builder = RequestBuilder::new(&config, orders_api()).unwrap();
        let prepared = builder
            .prepare_at("ListOrders", FlatParams::new(), Method::GET, fixed_time())
            .unwrap();
        assert_eq!(prepared.params.get("MWSAuthToken"), Some("amzn.mws.4ea38b7b"));
        assert!(prepared.canonical_query.contains("&MWSAuthToken=amzn.mws.4ea38b7b&"));
    }

    #[test]
    fn test_should_prepare_requests_concurrently() {
        let builder = test_builder(orders_api());
        let expected = builder
            .prepare_at("ListOrders", list_orders_params(), Method::POST, fixed_time())
            .unwrap()
            .signature;

        let builder = &builder;
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        let params = list_orders_params();
                        builder
                            .prepare_at("ListOrders", params, Method::POST, fixed_time())
                            .unwrap()
                            .signature
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
