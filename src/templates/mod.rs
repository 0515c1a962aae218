//! Built-in page templates
//!
//! Pages are assembled from small string templates; the listing and the
//! post page share one layout with the site header.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::{PostDetail, PostSummary};
use crate::helpers::{as_html, date_xml, html_escape, image_tag, link_to, Helpers};
use crate::pagination::PaginationState;

const LOAD_MORE_LABEL: &str = "Carregar mais posts";

/// Renders site pages to HTML strings
pub struct TemplateRenderer {
    site_title: String,
    language: String,
    description: String,
    helpers: Helpers,
}

impl TemplateRenderer {
    /// Create a renderer for a site
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            site_title: config.title.clone(),
            language: config.language.clone(),
            description: config.description.clone(),
            helpers: Helpers::new(config)?,
        })
    }

    /// A listing page with its "load more" control
    ///
    /// `next_link` is the page holding the next batch; the control is only
    /// rendered while the session still has a cursor.
    pub fn render_index(&self, state: &PaginationState, next_link: Option<&str>) -> String {
        let posts: String = state
            .items()
            .iter()
            .map(|post| self.render_summary(post))
            .collect();

        let load_more = match (state.cursor(), next_link) {
            (Some(cursor), Some(link)) => format!(
                r#"<div class="loading-more-posts"><a href="{}" data-next-page="{}">{}</a></div>"#,
                html_escape(link),
                html_escape(cursor),
                LOAD_MORE_LABEL
            ),
            _ => String::new(),
        };

        let body = format!(
            r#"<main class="container"><section class="content"><div class="posts">{}</div>{}</section></main>"#,
            posts, load_more
        );
        self.layout("Home", &body)
    }

    fn render_summary(&self, post: &PostSummary) -> String {
        let inner = format!(
            r#"<h1>{}</h1><h3>{}</h3><div class="info"><div class="calendar">{}</div><div class="user">{}</div></div>"#,
            html_escape(&post.title),
            html_escape(&post.subtitle),
            self.helpers.date(post.published_at.as_deref()),
            html_escape(&post.author)
        );
        link_to(&post_path(&post.id), &inner, false)
    }

    /// A single post page
    pub fn render_post(&self, post: &PostDetail) -> String {
        let banner = post
            .banner_url
            .as_deref()
            .map(|url| {
                format!(
                    r#"<header class="banner">{}</header>"#,
                    image_tag(url, Some(&post.title), Some(300))
                )
            })
            .unwrap_or_default();

        let date = match post.published_at.as_deref() {
            Some(raw) => format!(
                r#"<time datetime="{}">{}</time>"#,
                html_escape(&date_xml(raw).unwrap_or_else(|| raw.to_string())),
                self.helpers.date(Some(raw))
            ),
            None => String::new(),
        };

        let sections: String = post
            .sections
            .iter()
            .map(|section| {
                format!(
                    "<div><h2>{}</h2><div>{}</div></div>",
                    html_escape(&section.heading),
                    as_html(&section.body)
                )
            })
            .collect();

        let body = format!(
            concat!(
                r#"<main class="container">{}<div class="content"><article class="post">"#,
                r#"<h1>{}</h1><h3>{}</h3>"#,
                r#"<div class="info"><div class="calendar">{}</div><div class="user">{}</div><div class="clock">{} min</div></div>"#,
                r#"<section class="body-content">{}</section></article></div></main>"#
            ),
            banner,
            html_escape(&post.title),
            html_escape(&post.subtitle),
            date,
            html_escape(&post.author),
            post.reading_time_minutes,
            sections
        );
        self.layout(&post.title, &body)
    }

    fn layout(&self, title: &str, body: &str) -> String {
        let description = if self.description.is_empty() {
            String::new()
        } else {
            format!(
                r#"<meta name="description" content="{}">"#,
                html_escape(&self.description)
            )
        };

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="{}"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                r#"{}<title>{} | {}</title></head>"#,
                r#"<body><header class="header-container"><div class="header-content">{}</div></header>{}</body></html>"#,
                "\n"
            ),
            html_escape(&self.language),
            description,
            html_escape(title),
            html_escape(&self.site_title),
            link_to("/", &image_tag("/images/logo.svg", Some("logo"), None), false),
            body
        )
    }
}

/// Site path of a post page
pub fn post_path(uid: &str) -> String {
    format!("/post/{}", uid)
}

/// Site path of the n-th listing page, counting the home page as 1
pub fn page_path(number: usize) -> String {
    if number <= 1 {
        "/".to_string()
    } else {
        format!("/page/{}/", number)
    }
}
