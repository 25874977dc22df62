//! Integrations Marketplace page.
//!
//! Turns the records fetched by [`datocms`] into cards grouped by category and
//! renders them into a single static HTML document.

pub mod card;
pub mod category;
pub mod logos;
pub mod output;
pub mod page;
pub mod render;
pub mod source;
pub mod styles;
pub mod text;

use thiserror::Error;

pub use card::{Card, CardDescription, CardImage, Destination, RouteTemplate};
pub use category::{BrowseLink, Category};
pub use page::{compose, Block, PageView};
pub use render::{render_page, Renderer};
pub use source::{cards, CardSource};
pub use styles::Styles;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TemplatingError(#[from] templating::TemplatingError),
}

pub type MarketplaceResult<T> = Result<T, MarketplaceError>;
