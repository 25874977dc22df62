use datocms::models::{Logo, ResponsiveImage};
use serde::Serialize;

/// Where a card navigates to.
///
/// `route` is the logical page template understood by the client-side router,
/// `path` the concrete URL that also works when loaded directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub route: &'static str,
    pub path: String,
}

/// Route shared by every item of a collection, resolved by appending the item
/// identifier to `prefix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTemplate {
    pub route: &'static str,
    pub prefix: &'static str,
}

impl RouteTemplate {
    pub const STARTER: RouteTemplate = RouteTemplate {
        route: "/integrations/starters/[slug]",
        prefix: "/integrations/starters/",
    };

    pub const PLUGIN: RouteTemplate = RouteTemplate {
        route: "/plugins/i/[...chunks]",
        prefix: "/plugins/i/",
    };

    pub const HOSTING: RouteTemplate = RouteTemplate {
        route: "/integrations/hosting/[slug]",
        prefix: "/integrations/hosting/",
    };

    pub const ENTERPRISE: RouteTemplate = RouteTemplate {
        route: "/integrations/enterprise/[slug]",
        prefix: "/integrations/enterprise/",
    };

    pub fn resolve(&self, id: &str) -> Destination {
        Destination {
            route: self.route,
            path: format!("{}{}", self.prefix, id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardDescription {
    Text { text: String },
    /// Body text next to a secondary logo, used by starter projects.
    WithLogo { text: String, logo_url: String },
}

impl CardDescription {
    pub fn text(&self) -> &str {
        match self {
            CardDescription::Text { text } | CardDescription::WithLogo { text, .. } => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardImage {
    Responsive { image: ResponsiveImage },
    Logo { logo: Logo },
}

/// Uniform unit every collection item is projected into.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    /// Identifier of the item within its own collection.
    pub key: String,
    pub title: String,
    pub description: CardDescription,
    pub image: CardImage,
    pub destination: Destination,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::RouteTemplate;

    #[test_case(RouteTemplate::STARTER, "react-demo" => "/integrations/starters/react-demo")]
    #[test_case(RouteTemplate::PLUGIN, "acme-plugin" => "/plugins/i/acme-plugin")]
    #[test_case(RouteTemplate::HOSTING, "netlify" => "/integrations/hosting/netlify")]
    #[test_case(RouteTemplate::ENTERPRISE, "okta" => "/integrations/enterprise/okta")]
    fn should_resolve_path(template: RouteTemplate, id: &str) -> String {
        template.resolve(id).path
    }

    #[test]
    fn should_keep_logical_route() {
        let destination = RouteTemplate::PLUGIN.resolve("datocms-plugin-seo");
        assert_eq!("/plugins/i/[...chunks]", destination.route);
    }
}
