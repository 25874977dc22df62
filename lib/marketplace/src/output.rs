use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::MarketplaceResult;

pub const DEFAULT_OUTPUT_DIR: &str = "dist";

pub const DEFAULT_PAGE_PATH: &str = "integrations/index.html";

/// Writes `html` to `out_dir/page_path`, creating missing parent directories.
pub fn write_page(out_dir: &Path, page_path: &Path, html: &str) -> MarketplaceResult<PathBuf> {
    let target = out_dir.join(page_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&target, html)?;
    info!(path = %target.display(), "wrote integrations page");

    Ok(target)
}
