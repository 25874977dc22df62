use datocms::models::IntegrationsPage;
use serde::Serialize;
use tracing::debug;

use crate::category::Category;
use crate::logos::LogosBar;
use crate::source::cards;

pub const PAGE_TITLE: &str = "Integrations Marketplace";

pub const HERO_SUBTITLE: &str = "Expand and customize the capabilities of DatoCMS, integrating your favorite third-party services";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Top level building block of the page body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Category(Category),
    /// Categories laid out side by side.
    Grid { categories: Vec<Category> },
    LogosBar(LogosBar),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub hero: Hero,
    pub blocks: Vec<Block>,
}

impl PageView {
    /// Titles of the page sections in the order they are rendered.
    pub fn outline(&self) -> Vec<&'static str> {
        let mut titles = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Category(category) => titles.push(category.title),
                Block::Grid { categories } => titles.extend(categories.iter().map(|c| c.title)),
                Block::LogosBar(bar) => titles.push(bar.title),
            }
        }
        titles
    }

    pub fn categories(&self) -> Vec<&Category> {
        let mut categories = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Category(category) => categories.push(category),
                Block::Grid { categories: grid } => categories.extend(grid.iter()),
                Block::LogosBar(_) => {}
            }
        }
        categories
    }
}

/// Lays the fetched collections out in their fixed order: starters, plugins,
/// hosting, then asset storage and single sign-on side by side, then the
/// customer logos.
pub fn compose(page: &IntegrationsPage) -> PageView {
    debug!(
        demos = page.demos.len(),
        plugins = page.plugins.len(),
        hosting = page.hosting_building.len(),
        assets_storage = page.assets_storage.len(),
        single_sign_on = page.single_sign_on.len(),
        "composing integrations page"
    );

    let starters = Category::new("Starter projects", cards(&page.demos))
        .with_description(
            "Start with a fully configured DatoCMS project, a best practice frontend in a range of popular frameworks, and deployment on Netlify/ZEIT/Heroku.",
        )
        .with_browse("Browse all the starter projects", "/starters");

    let plugins = Category::new("Community Plugins", cards(&page.plugins))
        .with_description(
            "Easily expand and customize the capabilities of DatoCMS with one of the existing community plugins.",
        )
        .with_browse("Browse all the plugins", "/plugins");

    let hosting = Category::new("Hosting & CI Building", cards(&page.hosting_building))
        .with_description(
            "Server, serverless or static. No matter the stack you're using, we've got you covered.",
        );

    let assets_storage = Category::new("Assets storage", cards(&page.assets_storage))
        .with_description(
            "Keep 100% ownership of your media files using your own AWS/Google Storage buckets.",
        );

    let single_sign_on = Category::new("Single Sign-On", cards(&page.single_sign_on))
        .with_description("Keep your company data secure with centralized users management.");

    PageView {
        title: PAGE_TITLE,
        hero: Hero {
            title: PAGE_TITLE,
            subtitle: HERO_SUBTITLE,
        },
        blocks: vec![
            Block::Category(starters),
            Block::Category(plugins),
            Block::Category(hosting),
            Block::Grid {
                categories: vec![assets_storage, single_sign_on],
            },
            Block::LogosBar(LogosBar::default()),
        ],
    }
}
