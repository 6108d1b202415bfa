//! Raw catalog bytes to [`FeatureCatalog`].
//!
//! The published catalog is a JSON array with one object per feature:
//!
//! ```json
//! [
//!   {
//!     "name": "Jakarta Servlet 6.0",
//!     "shortDescription": "Jakarta Servlet 6.0 support",
//!     "wlpInformation": {
//!       "shortName": "servlet-6.0",
//!       "provideFeature": ["com.ibm.websphere.appserver.servlet-6.0"],
//!       "visibility": "PUBLIC",
//!       "platforms": ["jakartaee-10.0"],
//!       "requireFeature": ["com.ibm.websphere.appserver.eeCompatible-10.0"],
//!       "requireFeatureWithTolerates": [{ "feature": "io.openliberty.pages-3.1", "tolerates": ["4.0"] }],
//!       "configElements": ["httpSession"]
//!     }
//!   }
//! ]
//! ```
//!
//! Private features usually have no `shortName`; their first `provideFeature` is used as
//! the name instead.

use crate::FeatureCatalog;
use crate::error::{CatalogError, CatalogErrorExt};
use fcompat_domain::{Feature, ToleratedRequirement, Visibility};
use serde::Deserialize;
use tracing::{debug, warn};

/// Turns raw catalog bytes into a snapshot.
pub trait CatalogParser: Send + Sync + std::fmt::Debug {
    /// # Errors
    /// Returns a [`CatalogError`] when the payload is malformed.
    fn parse(&self, bytes: &[u8]) -> Result<FeatureCatalog, CatalogError>;
}

/// Parser for the published JSON catalog format.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCatalogParser;

impl CatalogParser for JsonCatalogParser {
    fn parse(&self, bytes: &[u8]) -> Result<FeatureCatalog, CatalogError> {
        let entries: Vec<RawFeature> =
            serde_json::from_slice(bytes).context("Failed to decode feature catalog")?;

        let features = entries
            .into_iter()
            .enumerate()
            .map(|(at, raw)| raw.into_feature(at))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = FeatureCatalog::new(features);
        debug!(features = catalog.len(), platforms = catalog.platforms().len(), "Catalog parsed");

        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeature {
    #[serde(default)]
    short_description: Option<String>,
    wlp_information: RawWlpInformation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawWlpInformation {
    short_name: Option<String>,
    provide_feature: Vec<String>,
    visibility: Option<String>,
    platforms: Vec<String>,
    require_feature: Vec<String>,
    require_feature_with_tolerates: Vec<RawTolerates>,
    config_elements: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTolerates {
    feature: String,
    #[serde(default)]
    tolerates: Vec<String>,
}

impl RawFeature {
    fn into_feature(self, at: usize) -> Result<Feature, CatalogError> {
        let info = self.wlp_information;
        let symbolic_name = info.provide_feature.into_iter().next();

        let Some(name) = info
            .short_name
            .filter(|name| !name.trim().is_empty())
            .or_else(|| symbolic_name.clone())
        else {
            return Err(CatalogError::Invalid {
                message: format!("entry #{at} has neither shortName nor provideFeature").into(),
                context: None,
            });
        };

        let mut feature = Feature::new(name, parse_visibility(info.visibility.as_deref()))
            .with_platforms(info.platforms)
            .with_requires(info.require_feature)
            .with_config_elements(info.config_elements);

        if let Some(symbolic_name) = symbolic_name {
            feature = feature.with_symbolic_name(symbolic_name);
        }
        if let Some(description) = self.short_description {
            feature = feature.with_description(description);
        }
        for raw in info.require_feature_with_tolerates {
            feature = feature.with_tolerates(ToleratedRequirement::new(raw.feature, raw.tolerates));
        }

        Ok(feature)
    }
}

fn parse_visibility(raw: Option<&str>) -> Visibility {
    match raw.map(str::trim) {
        None => Visibility::Public,
        Some(value) if value.eq_ignore_ascii_case("public") => Visibility::Public,
        Some(value) if value.eq_ignore_ascii_case("private") => Visibility::Private,
        Some(value) if value.eq_ignore_ascii_case("protected") => Visibility::Protected,
        Some(value) if value.eq_ignore_ascii_case("install") => Visibility::Install,
        Some(other) => {
            warn!(visibility = other, "Unknown feature visibility, treating as private");
            Visibility::Private
        },
    }
}
