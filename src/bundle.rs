use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Dataset;

const HEADER: &str = "// Auto-generated by allsport-data";

/// Front-end module text: a `SPORTS_DATA` constant, a `window` global, and a
/// default export.
pub fn render_bundle(dataset: &Dataset) -> Result<String> {
    let json = serde_json::to_string_pretty(dataset).context("serialize dataset")?;
    Ok(format!(
        "{HEADER}\n\
         const SPORTS_DATA = {json};\n\
         if (typeof window !== 'undefined') {{ window.SPORTS_DATA = SPORTS_DATA; }}\n\
         export default SPORTS_DATA;\n"
    ))
}

pub fn write_bundle(dataset: &Dataset, path: &Path) -> Result<()> {
    let content = render_bundle(dataset)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let tmp = path.with_extension("js.tmp");
    fs::write(&tmp, content).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}
