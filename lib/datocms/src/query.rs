use std::fmt;

/// Fields requested for every `responsiveImage` in the document.
pub const IMAGE_FIELDS_FRAGMENT: &str = r#"fragment imageFields on ResponsiveImage {
  srcSet
  webpSrcSet
  sizes
  src
  width
  height
  aspectRatio
  alt
  title
  bgColor
  base64
}"#;

/// Shared shape of the asset storage and single sign-on collections.
pub const ENTERPRISE_APP_FRAGMENT: &str = r#"fragment enterpriseApp on EnterpriseAppRecord {
  slug
  title
  description: shortDescription
  logo {
    url
    width
    height
  }
}"#;

const INTEGRATIONS_PAGE_OPERATION: &str = r#"{
  page: integrationsPage {
    demos {
      id
      code
      githubRepo
      deploymentType
      description
      name
      demoName
      technology {
        name
        logo {
          url
        }
      }
      category {
        name
      }
      screenshot {
        responsiveImage(imgixParams: { w: 300, h: 200, fit: crop, crop: top }) {
          ...imageFields
        }
      }
    }
    plugins {
      packageName
      coverImage {
        responsiveImage(imgixParams: { w: 300, h: 200, fit: crop }) {
          ...imageFields
        }
      }
      title
      description
    }
    hostingBuilding {
      slug
      title
      description: shortDescription
      logo {
        url
        width
        height
      }
    }
    assetsStorage {
      ...enterpriseApp
    }
    singleSignOn {
      ...enterpriseApp
    }
  }
}"#;

/// A GraphQL document: one operation followed by the fragments it spreads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryDocument {
    operation: String,
    fragments: Vec<String>,
}

impl QueryDocument {
    pub fn new<S: Into<String>>(operation: S) -> Self {
        Self {
            operation: operation.into(),
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment definition. Adding the same fragment twice is a no-op
    /// as GraphQL rejects documents with duplicate fragment names.
    pub fn fragment<S: Into<String>>(mut self, fragment: S) -> Self {
        let fragment = fragment.into();
        if !self.fragments.contains(&fragment) {
            self.fragments.push(fragment);
        }
        self
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operation)?;
        for fragment in &self.fragments {
            write!(f, "\n\n{fragment}")?;
        }
        Ok(())
    }
}

/// The single query issued when generating the integrations page.
pub fn integrations_page_query() -> QueryDocument {
    QueryDocument::new(INTEGRATIONS_PAGE_OPERATION)
        .fragment(ENTERPRISE_APP_FRAGMENT)
        .fragment(IMAGE_FIELDS_FRAGMENT)
}
