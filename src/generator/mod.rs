//! Generator module - writes the static site from the content source

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentLoader, PostSummary};
use crate::pagination::PaginationController;
use crate::source::ContentSource;
use crate::templates::{page_path, TemplateRenderer};
use crate::Site;

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="239" height="26" viewBox="0 0 239 26"><text x="0" y="20" font-family="Inter, sans-serif" font-size="22" font-weight="700" fill="#F8F8F8">spacetraveling<tspan fill="#FF57B2">.</tspan></text></svg>
"##;

/// What a generation run produced
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerateReport {
    /// Posts in the listing
    pub listed: usize,
    /// Listing pages written, the home page included
    pub pages: usize,
    /// Post pages written
    pub generated: usize,
    /// UIDs listed but not found (or not usable as a path) at lookup time
    pub skipped: Vec<String>,
}

/// Static site generator
pub struct Generator<'a, S: ContentSource + ?Sized> {
    site: &'a Site,
    source: &'a S,
    loader: ContentLoader<'a, S>,
    renderer: TemplateRenderer,
}

impl<'a, S: ContentSource + ?Sized> Generator<'a, S> {
    /// Create a new generator
    pub fn new(site: &'a Site, source: &'a S) -> Result<Self> {
        Ok(Self {
            site,
            source,
            loader: ContentLoader::new(source),
            renderer: TemplateRenderer::new(&site.config)?,
        })
    }

    /// Generate the entire site
    pub async fn generate(&self) -> Result<GenerateReport> {
        fs::create_dir_all(&self.site.public_dir)?;
        write_file(&self.site.public_dir.join("images/logo.svg"), LOGO_SVG)?;

        let (summaries, pages) = self.generate_listing().await?;

        let mut report = GenerateReport {
            listed: summaries.len(),
            pages,
            ..Default::default()
        };

        for summary in &summaries {
            let Some(output_path) = post_output_path(&self.site.public_dir, &summary.id) else {
                tracing::warn!("Skipping post with unusable uid {:?}", summary.id);
                report.skipped.push(summary.id.clone());
                continue;
            };

            let detail = self
                .loader
                .fetch_detail(&summary.id)
                .await
                .with_context(|| format!("Failed to load post {}", summary.id))?;

            match detail {
                Some(post) => {
                    write_file(&output_path, &self.renderer.render_post(&post))?;
                    tracing::debug!("Generated post: {:?}", output_path);
                    report.generated += 1;
                }
                None => {
                    tracing::warn!("Post {} is listed but could not be found", summary.id);
                    report.skipped.push(summary.id.clone());
                }
            }
        }

        Ok(report)
    }

    /// Write the home page and one listing page per "load more" step
    ///
    /// Page n holds every post loaded after n - 1 steps, so following the
    /// control keeps what was on screen and appends the next batch.
    async fn generate_listing(&self) -> Result<(Vec<PostSummary>, usize)> {
        let mut state = self
            .loader
            .first_page(self.site.config.page_size)
            .await
            .context("Failed to load the post listing")?;
        let controller = PaginationController::new(self.source);
        let mut visited: HashSet<String> = HashSet::new();
        let mut number = 1;

        loop {
            let next = state
                .cursor()
                .filter(|cursor| !visited.contains(*cursor))
                .map(str::to_string);
            let next_link = next.as_ref().map(|_| page_path(number + 1));

            let html = self.renderer.render_index(&state, next_link.as_deref());
            write_file(&listing_output_path(&self.site.public_dir, number), &html)?;
            tracing::debug!(
                "Generated listing page {} with {} posts",
                number,
                state.items().len()
            );

            let Some(cursor) = next else {
                if let Some(cursor) = state.cursor() {
                    tracing::warn!("Cursor {} was already visited, stopping", cursor);
                }
                break;
            };
            visited.insert(cursor);

            controller
                .load_more(&mut state)
                .await
                .with_context(|| format!("Failed to load listing page {}", number + 1))?;
            number += 1;
        }

        Ok((state.into_items(), number))
    }
}

/// Where the n-th listing page is written
pub fn listing_output_path(public_dir: &Path, number: usize) -> PathBuf {
    if number <= 1 {
        public_dir.join("index.html")
    } else {
        public_dir.join("page").join(number.to_string()).join("index.html")
    }
}

/// Whether a uid can be used as a single path segment
pub fn is_safe_uid(uid: &str) -> bool {
    !uid.is_empty()
        && uid
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Where the page for a post is written, `None` for unsafe uids
pub fn post_output_path(public_dir: &Path, uid: &str) -> Option<PathBuf> {
    is_safe_uid(uid).then(|| public_dir.join("post").join(uid).join("index.html"))
}

/// Write a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
    }
    fs::write(path, content).map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", path, e))?;
    Ok(())
}
