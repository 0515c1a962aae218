//! List posts in the content repository

use anyhow::Result;

use crate::content::{ContentLoader, PostSummary};
use crate::helpers::Helpers;
use crate::Site;

/// Print every post, following the listing cursor to the end
pub async fn run(site: &Site) -> Result<()> {
    let client = site.connect().await?;
    let posts = ContentLoader::new(&client)
        .all_summaries(site.config.paths_page_size)
        .await?;

    let helpers = Helpers::new(&site.config)?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", format_line(&helpers, post));
    }

    Ok(())
}

fn format_line(helpers: &Helpers, post: &PostSummary) -> String {
    let date = match post.published_at.as_deref() {
        Some(_) => helpers.date(post.published_at.as_deref()),
        None => "unpublished".to_string(),
    };
    format!("  {} - {} [{}]", date, post.title, post.id)
}
