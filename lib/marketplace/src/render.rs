use std::collections::HashMap;

use datocms::models::IntegrationsPage;
use serde::Serialize;
use templating::{TemplateContext, Templates};
use tracing::debug;

use crate::page::{compose, PageView};
use crate::styles::Styles;
use crate::MarketplaceResult;

const PAGE_TEMPLATE: &str = "page.html";

const TEMPLATES: [(&str, &str); 4] = [
    (PAGE_TEMPLATE, include_str!("../templates/page.html")),
    ("category.html", include_str!("../templates/category.html")),
    ("card.html", include_str!("../templates/card.html")),
    ("logos_bar.html", include_str!("../templates/logos_bar.html")),
];

#[derive(Serialize)]
struct PageContext<'a> {
    page: &'a PageView,
    styles: &'a Styles,
}

/// Turns a [`PageView`] into an HTML document.
#[derive(Debug)]
pub struct Renderer {
    templates: Templates<'static>,
    styles: Styles,
}

impl Renderer {
    pub fn new(styles: Styles) -> MarketplaceResult<Self> {
        let templates = TEMPLATES
            .iter()
            .map(|(name, source)| (*name, source.to_string()))
            .collect::<HashMap<_, _>>();

        Ok(Self {
            templates: Templates::new_with_templates(templates)?,
            styles,
        })
    }

    pub fn render(&self, view: &PageView) -> MarketplaceResult<String> {
        let context = TemplateContext::from_serialize(PageContext {
            page: view,
            styles: &self.styles,
        })?;

        let html = self.templates.render(PAGE_TEMPLATE, context)?;
        debug!(bytes = html.len(), "rendered integrations page");
        Ok(html)
    }
}

/// Composes and renders the page in one go.
pub fn render_page(page: &IntegrationsPage, styles: Styles) -> MarketplaceResult<String> {
    Renderer::new(styles)?.render(&compose(page))
}
