use serde::{Deserialize, Serialize};

/// Class names for every logical component on the page.
///
/// Handed to the renderer explicitly so a build can swap in hashed class names
/// from its stylesheet pipeline. Missing entries fall back to the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Styles {
    pub hero: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub highlight: String,
    pub category: String,
    pub category_header: String,
    pub category_header_with_browse: String,
    pub category_left: String,
    pub category_title: String,
    pub category_desc: String,
    pub browse_all: String,
    pub boxes: String,
    pub box_container: String,
    pub r#box: String,
    pub box_image: String,
    pub box_image_image: String,
    pub box_body: String,
    pub box_title: String,
    pub box_description: String,
    pub demo_desc: String,
    pub demo_desc_body: String,
    pub demo_desc_image: String,
    pub tech_logo: String,
    pub grid: String,
    pub logos_bar: String,
    pub logos_bar_title: String,
    pub logos_bar_logos: String,
    pub space_bottom: String,
}

impl Default for Styles {
    fn default() -> Self {
        let class = |name: &str| format!("integrations-{name}");
        Self {
            hero: class("hero"),
            hero_title: class("hero-title"),
            hero_subtitle: class("hero-subtitle"),
            highlight: class("highlight"),
            category: class("category"),
            category_header: class("category-header"),
            category_header_with_browse: class("category-header--with-browse"),
            category_left: class("category-left"),
            category_title: class("category-title"),
            category_desc: class("category-desc"),
            browse_all: class("browse-all"),
            boxes: class("boxes"),
            box_container: class("box-container"),
            r#box: class("box"),
            box_image: class("box-image"),
            box_image_image: class("box-image-image"),
            box_body: class("box-body"),
            box_title: class("box-title"),
            box_description: class("box-description"),
            demo_desc: class("demo-desc"),
            demo_desc_body: class("demo-desc-body"),
            demo_desc_image: class("demo-desc-image"),
            tech_logo: class("tech-logo"),
            grid: class("grid"),
            logos_bar: class("logos-bar"),
            logos_bar_title: class("logos-bar-title"),
            logos_bar_logos: class("logos-bar-logos"),
            space_bottom: class("space-bottom"),
        }
    }
}
