use fcompat_catalog::FeatureCatalog;
use fcompat_domain::{Declarations, Feature, ToleratedRequirement};

const VERSIONLESS: &str = "io.openliberty.internal.versionless.";

fn platform(symbolic: &str, platform: &str) -> Feature {
    Feature::private(symbolic).with_platforms([platform])
}

fn versionless(name: &str, first: &str, tolerates: &[&str]) -> Feature {
    let requirement =
        ToleratedRequirement::new(format!("{VERSIONLESS}{first}"), tolerates.iter().copied());
    Feature::public(name).with_tolerates(requirement)
}

/// A trimmed-down Open Liberty catalog covering Java EE 8, Jakarta EE 9.1/10 and
/// MicroProfile 4.1/6.0.
pub fn catalog() -> FeatureCatalog {
    FeatureCatalog::new([
        platform("com.ibm.websphere.appserver.eeCompatible-8.0", "javaee-8.0"),
        platform("com.ibm.websphere.appserver.eeCompatible-9.0", "jakartaee-9.1"),
        platform("com.ibm.websphere.appserver.eeCompatible-10.0", "jakartaee-10.0"),
        platform("io.openliberty.mpCompatible-4.0", "microProfile-4.1"),
        platform("io.openliberty.mpCompatible-6.0", "microProfile-6.0"),
        Feature::public("jaxrs-2.0").with_platforms(["javaee-7.0"]),
        Feature::public("jaxrs-2.1").with_platforms(["javaee-8.0"]),
        Feature::public("restfulWS-3.0").with_platforms(["jakartaee-9.1"]),
        Feature::public("restfulWS-3.1").with_platforms(["jakartaee-10.0"]),
        Feature::public("servlet-4.0")
            .with_platforms(["javaee-8.0"])
            .with_config_elements(["httpSession"]),
        Feature::public("servlet-5.0")
            .with_platforms(["jakartaee-9.1"])
            .with_config_elements(["httpSession"]),
        Feature::public("servlet-6.0")
            .with_symbolic_name("com.ibm.websphere.appserver.servlet-6.0")
            .with_platforms(["jakartaee-10.0"])
            .with_config_elements(["httpSession"]),
        Feature::public("webProfile-10.0")
            .with_platforms(["jakartaee-10.0"])
            .with_requires(["com.ibm.websphere.appserver.servlet-6.0"]),
        Feature::public("jsonp-2.0").with_platforms(["jakartaee-9.1"]),
        Feature::public("jsonp-2.1").with_platforms(["jakartaee-10.0", "microProfile-6.0"]),
        Feature::public("mpHealth-3.1").with_platforms(["microProfile-4.1"]),
        Feature::public("mpHealth-4.0")
            .with_platforms(["microProfile-6.0"])
            .with_config_elements(["mpHealth"]),
        Feature::public("mpMetrics-5.0").with_platforms(["microProfile-6.0"]),
        Feature::public("localConnector-1.0"),
        versionless("servlet", "servlet-4.0", &["5.0", "6.0"]),
        versionless("restfulWS", "restfulWS-3.0", &["3.1"]),
        versionless("jsonp", "jsonp-2.0", &["2.1"]),
        Feature::public("mpHealth").with_requires([
            format!("{VERSIONLESS}mpHealth-3.1"),
            format!("{VERSIONLESS}mpHealth-4.0"),
        ]),
    ])
}

pub fn features(names: &[&str]) -> Declarations {
    Declarations::new().with_features(names.iter().copied())
}
