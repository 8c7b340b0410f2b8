//! Signature vectors and signing-string properties.

#[cfg(test)]
mod tests {
    use mws_auth::canonical::build_string_to_sign;
    use mws_auth::{AuthError, Signer, sign};

    const QUERY: &str = "Timestamp=1";

    #[test]
    fn test_should_match_reference_signature() {
        assert_eq!(
            sign("GET", "Example.com", "/", QUERY, "secret").unwrap(),
            "yXEUepPwA1dMNgE6DuX2Z3p4SL0984IJ5TVcpMHwc2o="
        );
    }

    #[test]
    fn test_should_be_stable_across_calls() {
        let first = sign("GET", "Example.com", "/", QUERY, "secret").unwrap();
        let second = sign("GET", "Example.com", "/", QUERY, "secret").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_change_when_any_input_changes() {
        let base = sign("GET", "Example.com", "/", QUERY, "secret").unwrap();
        let variants = [
            sign("POST", "Example.com", "/", QUERY, "secret"),
            sign("GET", "example.org", "/", QUERY, "secret"),
            sign("GET", "Example.com", "/Orders/2013-09-01", QUERY, "secret"),
            sign("GET", "Example.com", "/", "Timestamp=2", "secret"),
            sign("GET", "Example.com", "/", QUERY, "other"),
        ];
        for variant in variants {
            assert_ne!(variant.unwrap(), base);
        }
    }

    #[test]
    fn test_should_ignore_scheme_and_host_case() {
        let plain = sign("GET", "mws.amazonservices.com", "/", QUERY, "secret").unwrap();
        let full = sign("GET", "https://MWS.AmazonServices.com", "/", QUERY, "secret").unwrap();
        assert_eq!(plain, full);
    }

    #[test]
    fn test_should_lay_out_signing_string() {
        assert_eq!(
            build_string_to_sign("POST", "https://mws.amazonservices.com", "", "A=1"),
            "POST\nmws.amazonservices.com\n/\nA=1"
        );
    }

    #[test]
    fn test_should_reject_empty_secret() {
        assert!(matches!(
            sign("GET", "example.com", "/", QUERY, ""),
            Err(AuthError::Signing(_))
        ));
        assert!(Signer::new("").is_err());
    }

    #[test]
    fn test_should_verify_with_signer() {
        let signer = Signer::new("secret").unwrap();
        let signature = signer.sign("GET", "Example.com", "/", QUERY).unwrap();
        assert!(signer.verify("GET", "example.com", "/", QUERY, &signature).unwrap());
        assert!(!signer.verify("GET", "example.com", "/", "Timestamp=2", &signature).unwrap());
    }
}
