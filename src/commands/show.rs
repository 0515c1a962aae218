//! Show a single post

use anyhow::Result;

use crate::content::{reading_time, ContentLoader, PostDetail};
use crate::helpers::Helpers;
use crate::Site;

/// Print a post's metadata and section outline
pub async fn run(site: &Site, uid: &str) -> Result<()> {
    let client = site.connect().await?;

    match ContentLoader::new(&client).fetch_detail(uid).await? {
        Some(post) => {
            let helpers = Helpers::new(&site.config)?;
            print!("{}", describe(&helpers, &post));
        }
        None => println!("Post {} not found", uid),
    }

    Ok(())
}

fn describe(helpers: &Helpers, post: &PostDetail) -> String {
    let mut out = format!("{}\n", post.title);
    if !post.subtitle.is_empty() {
        out.push_str(&format!("{}\n", post.subtitle));
    }
    out.push_str(&format!(
        "{} | {} | {} min\n",
        helpers.date(post.published_at.as_deref()),
        post.author,
        post.reading_time_minutes
    ));
    if let Some(banner) = &post.banner_url {
        out.push_str(&format!("banner: {}\n", banner));
    }
    for section in &post.sections {
        out.push_str(&format!(
            "  - {} ({} words)\n",
            section.heading,
            reading_time::count_words(&section.body_text())
        ));
    }
    out
}
