use fcompat_catalog::{CatalogError, CatalogParser, JsonCatalogParser};
use fcompat_domain::Visibility;
use serde_json::json;

fn sample() -> Vec<u8> {
    let raw = json!([
        {
            "name": "Jakarta Servlet 6.0",
            "shortDescription": "Jakarta Servlet 6.0 support",
            "wlpInformation": {
                "shortName": "servlet-6.0",
                "provideFeature": ["com.ibm.websphere.appserver.servlet-6.0"],
                "visibility": "PUBLIC",
                "platforms": ["jakartaee-10.0"],
                "requireFeature": ["com.ibm.websphere.appserver.eeCompatible-10.0"],
                "configElements": ["httpSession"]
            }
        },
        {
            "name": "Java EE 10 compatibility",
            "wlpInformation": {
                "provideFeature": ["com.ibm.websphere.appserver.eeCompatible-10.0"],
                "visibility": "PRIVATE",
                "platforms": ["JakartaEE-10.0"]
            }
        },
        {
            "name": "Servlet",
            "wlpInformation": {
                "shortName": "servlet",
                "provideFeature": ["io.openliberty.servlet"],
                "visibility": "PUBLIC",
                "requireFeatureWithTolerates": [
                    { "feature": "io.openliberty.internal.versionless.servlet-5.0", "tolerates": ["6.0"] }
                ]
            }
        }
    ]);
    serde_json::to_vec(&raw).expect("serialize sample")
}

#[test]
fn parses_public_and_private_entries() {
    let catalog = JsonCatalogParser.parse(&sample()).expect("catalog parses");
    assert_eq!(catalog.len(), 3);

    let servlet = catalog.public_feature("servlet-6.0").expect("servlet-6.0");
    assert_eq!(servlet.version.as_deref(), Some("6.0"));
    assert_eq!(servlet.description.as_deref(), Some("Jakarta Servlet 6.0 support"));
    assert_eq!(servlet.config_elements, vec!["httpSession".to_owned()]);

    let compat = catalog.feature("com.ibm.websphere.appserver.eeCompatible-10.0").expect("private");
    assert_eq!(compat.visibility, Visibility::Private);
    assert!(catalog.has_platform("jakartaee-10.0"));

    let versionless = catalog.public_feature("servlet").expect("versionless");
    assert!(versionless.is_versionless());
    assert_eq!(versionless.requires_with_tolerates[0].tolerates, vec!["6.0".to_owned()]);
}

#[test]
fn graph_links_requirements() {
    let catalog = JsonCatalogParser.parse(&sample()).expect("catalog parses");
    let enablers = catalog.graph().all_enabled_by("httpSession");
    assert!(enablers.contains("servlet-6.0"));
    assert!(
        catalog
            .graph()
            .all_enables("servlet-6.0")
            .contains("com.ibm.websphere.appserver.eeCompatible-10.0")
    );
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = JsonCatalogParser.parse(b"[]").expect("empty catalog");
    assert!(catalog.is_empty());
}

#[test]
fn malformed_payload_is_a_parse_error() {
    let err = JsonCatalogParser.parse(b"<features/>").expect_err("not json");
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert_eq!(err.context_str(), Some("Failed to decode feature catalog"));
}

#[test]
fn nameless_entry_is_invalid() {
    let raw = br#"[{ "wlpInformation": { "visibility": "PUBLIC" } }]"#;
    let err = JsonCatalogParser.parse(raw).expect_err("nameless entry");
    assert!(matches!(err, CatalogError::Invalid { .. }));
}
