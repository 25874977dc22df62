use datocms::models::{EnterpriseApp, HostingProvider, Plugin, StarterDemo};

use crate::card::{Card, CardDescription, CardImage, RouteTemplate};
use crate::text::truncate_description;

/// A collection item that can be shown as a [`Card`].
pub trait CardSource {
    const ROUTE: RouteTemplate;

    /// Identifier unique within the collection, used as list key and path segment.
    fn key(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> CardDescription;

    fn image(&self) -> CardImage;

    fn to_card(&self) -> Card {
        Card {
            key: self.key().to_string(),
            title: self.title().to_string(),
            description: self.description(),
            image: self.image(),
            destination: Self::ROUTE.resolve(self.key()),
        }
    }
}

/// Projects every item into a card, keeping the order they were fetched in.
pub fn cards<T: CardSource>(items: &[T]) -> Vec<Card> {
    items.iter().map(CardSource::to_card).collect()
}

impl CardSource for StarterDemo {
    const ROUTE: RouteTemplate = RouteTemplate::STARTER;

    fn key(&self) -> &str {
        &self.code
    }

    fn title(&self) -> &str {
        &self.name
    }

    // starters show the technology logo instead of being truncated
    fn description(&self) -> CardDescription {
        CardDescription::WithLogo {
            text: self.description.clone(),
            logo_url: self.technology.logo.url.clone(),
        }
    }

    fn image(&self) -> CardImage {
        CardImage::Responsive {
            image: self.screenshot.responsive_image.clone(),
        }
    }
}

impl CardSource for Plugin {
    const ROUTE: RouteTemplate = RouteTemplate::PLUGIN;

    fn key(&self) -> &str {
        &self.package_name
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> CardDescription {
        CardDescription::Text {
            text: truncate_description(&self.description),
        }
    }

    fn image(&self) -> CardImage {
        CardImage::Responsive {
            image: self.cover_image.responsive_image.clone(),
        }
    }
}

impl CardSource for HostingProvider {
    const ROUTE: RouteTemplate = RouteTemplate::HOSTING;

    fn key(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> CardDescription {
        CardDescription::Text {
            text: truncate_description(&self.description),
        }
    }

    fn image(&self) -> CardImage {
        CardImage::Logo {
            logo: self.logo.clone(),
        }
    }
}

impl CardSource for EnterpriseApp {
    const ROUTE: RouteTemplate = RouteTemplate::ENTERPRISE;

    fn key(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> CardDescription {
        CardDescription::Text {
            text: truncate_description(&self.description),
        }
    }

    fn image(&self) -> CardImage {
        CardImage::Logo {
            logo: self.logo.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use datocms::models::{
        DemoCategory, EnterpriseApp, FileField, HostingProvider, ImageField, IntegrationsPage,
        Logo, Plugin, ResponsiveImage, StarterDemo, Technology,
    };

    pub(crate) fn responsive_image() -> ResponsiveImage {
        ResponsiveImage {
            src: "https://www.datocms-assets.com/205/cover.png".to_string(),
            src_set: "https://www.datocms-assets.com/205/cover.png?dpr=0.5 150w".to_string(),
            webp_src_set: Some(
                "https://www.datocms-assets.com/205/cover.png?dpr=0.5&fm=webp 150w".to_string(),
            ),
            sizes: "(max-width: 300px) 100vw, 300px".to_string(),
            width: 300,
            height: 200,
            aspect_ratio: 1.5,
            alt: None,
            title: None,
            bg_color: Some("#e4e4e4".to_string()),
            base64: Some("data:image/jpeg;base64,AAAA".to_string()),
        }
    }

    pub(crate) fn logo() -> Logo {
        Logo {
            url: "https://www.datocms-assets.com/205/logo.svg".to_string(),
            width: Some(120),
            height: Some(40),
        }
    }

    pub(crate) fn starter(code: &str) -> StarterDemo {
        StarterDemo {
            id: format!("id-{code}"),
            code: code.to_string(),
            github_repo: Some(format!("datocms/{code}")),
            deployment_type: Some("static".to_string()),
            description: "A fully configured blog with a best practice frontend".to_string(),
            name: format!("Starter {code}"),
            demo_name: None,
            technology: Technology {
                name: "React".to_string(),
                logo: FileField {
                    url: "https://www.datocms-assets.com/205/react.svg".to_string(),
                },
            },
            category: DemoCategory {
                name: "Blog".to_string(),
            },
            screenshot: ImageField {
                responsive_image: responsive_image(),
            },
        }
    }

    pub(crate) fn plugin(package_name: &str, description: &str) -> Plugin {
        Plugin {
            package_name: package_name.to_string(),
            cover_image: ImageField {
                responsive_image: responsive_image(),
            },
            title: format!("Plugin {package_name}"),
            description: description.to_string(),
        }
    }

    pub(crate) fn hosting(slug: &str) -> HostingProvider {
        HostingProvider {
            slug: slug.to_string(),
            title: format!("Hosting {slug}"),
            description: "Server, serverless or static hosting for every stack out there".to_string(),
            logo: logo(),
        }
    }

    pub(crate) fn enterprise(slug: &str, title: &str) -> EnterpriseApp {
        EnterpriseApp {
            slug: slug.to_string(),
            title: title.to_string(),
            description: "Enterprise grade integration".to_string(),
            logo: logo(),
        }
    }

    pub(crate) fn page() -> IntegrationsPage {
        IntegrationsPage {
            demos: vec![starter("react-demo"), starter("vue-demo")],
            plugins: vec![
                plugin("seo-tool", &"A".repeat(100)),
                plugin("shopify-product", "Pick Shopify products"),
            ],
            hosting_building: vec![hosting("netlify"), hosting("vercel")],
            assets_storage: vec![enterprise("aws-s3", "Amazon S3")],
            single_sign_on: vec![enterprise("okta", "Okta"), enterprise("azure-ad", "Azure AD")],
        }
    }
}

#[cfg(test)]
mod tests {
    use datocms::models::HostingProvider;

    use super::fixtures::{enterprise, hosting, page, plugin, starter};
    use super::{cards, CardSource};
    use crate::card::{CardDescription, CardImage};
    use crate::text::{DESCRIPTION_MAX_LENGTH, ELLIPSIS};

    #[test]
    fn should_render_one_card_per_item_in_order() {
        let page = page();

        let demos = cards(&page.demos);
        let plugins = cards(&page.plugins);
        let hosting_cards = cards(&page.hosting_building);
        let single_sign_on = cards(&page.single_sign_on);

        assert_eq!(page.demos.len(), demos.len());
        assert_eq!(page.plugins.len(), plugins.len());
        assert_eq!(page.hosting_building.len(), hosting_cards.len());
        assert_eq!(
            vec!["okta", "azure-ad"],
            single_sign_on.iter().map(|c| c.key.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn should_keep_duplicates_and_order() {
        let items = vec![hosting("b"), hosting("a"), hosting("b")];
        let keys: Vec<String> = cards(&items).into_iter().map(|c| c.key).collect();

        assert_eq!(vec!["b", "a", "b"], keys);
    }

    #[test]
    fn should_map_empty_collection() {
        assert!(cards::<HostingProvider>(&[]).is_empty());
    }

    #[test]
    fn should_truncate_plugin_description() {
        let card = plugin("seo-tool", &"A".repeat(100)).to_card();

        assert_eq!("Plugin seo-tool", card.title);
        assert_eq!("/plugins/i/seo-tool", card.destination.path);
        assert_eq!(DESCRIPTION_MAX_LENGTH + 1, card.description.text().chars().count());
        assert!(card.description.text().ends_with(ELLIPSIS));
    }

    #[test]
    fn should_not_truncate_starter_description() {
        let mut demo = starter("react-demo");
        demo.description = "B".repeat(80);
        let card = demo.to_card();

        assert_eq!(
            CardDescription::WithLogo {
                text: "B".repeat(80),
                logo_url: "https://www.datocms-assets.com/205/react.svg".to_string(),
            },
            card.description
        );
        assert_eq!("/integrations/starters/react-demo", card.destination.path);
        assert!(matches!(card.image, CardImage::Responsive { .. }));
    }

    #[test]
    fn should_use_logo_for_enterprise_apps() {
        let card = enterprise("okta", "Okta").to_card();

        assert_eq!("/integrations/enterprise/okta", card.destination.path);
        assert_eq!("/integrations/enterprise/[slug]", card.destination.route);
        assert!(matches!(card.image, CardImage::Logo { .. }));
        assert_eq!("Enterprise grade integration", card.description.text());
    }
}
