use serde::{Deserialize, Serialize};

/// Pre-computed image variants produced by the imgix pipeline.
///
/// Opaque to the page: it is handed to the image renderer as-is.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImage {
    pub src: String,
    pub src_set: String,
    #[serde(default)]
    pub webp_src_set: Option<String>,
    pub sizes: String,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    /// Inline low quality placeholder shown while the image loads.
    #[serde(default)]
    pub base64: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageField {
    pub responsive_image: ResponsiveImage,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileField {
    pub url: String,
}

/// Upload with intrinsic dimensions. SVG uploads come back without them.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Logo {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Technology {
    pub name: String,
    pub logo: FileField,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DemoCategory {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarterDemo {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub github_repo: Option<String>,
    #[serde(default)]
    pub deployment_type: Option<String>,
    pub description: String,
    pub name: String,
    #[serde(default)]
    pub demo_name: Option<String>,
    pub technology: Technology,
    pub category: DemoCategory,
    pub screenshot: ImageField,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub package_name: String,
    pub cover_image: ImageField,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HostingProvider {
    pub slug: String,
    pub title: String,
    /// Aliased from `shortDescription`.
    pub description: String,
    pub logo: Logo,
}

/// Used for both asset storage and single sign-on integrations.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnterpriseApp {
    pub slug: String,
    pub title: String,
    /// Aliased from `shortDescription`.
    pub description: String,
    pub logo: Logo,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationsPage {
    pub demos: Vec<StarterDemo>,
    pub plugins: Vec<Plugin>,
    pub hosting_building: Vec<HostingProvider>,
    pub assets_storage: Vec<EnterpriseApp>,
    pub single_sign_on: Vec<EnterpriseApp>,
}

/// Root of the `data` object returned for [`crate::integrations_page_query`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct IntegrationsPageQuery {
    pub page: IntegrationsPage,
}

impl IntegrationsPageQuery {
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
