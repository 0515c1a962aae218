//! HTML helper functions

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("/post/hooks", "Hooks", false) // -> <a href="/post/hooks">Hooks</a>
/// ```
pub fn link_to(href: &str, text: &str, external: bool) -> String {
    if external || href.starts_with("http://") || href.starts_with("https://") {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(href),
            text
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, html_escape(href), text)
    }
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: Option<&str>, height: Option<u32>) -> String {
    let height_attr = height
        .map(|h| format!(r#" height="{}""#, h))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(src),
        html_escape(alt.unwrap_or("")),
        height_attr
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

/// Push one character, escaped for HTML text or attribute context
pub fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(
            link_to("/post/hooks", "Hooks", false),
            r#"<a href="/post/hooks">Hooks</a>"#
        );
        assert!(link_to("https://rocketseat.com.br", "x", false).contains(r#"target="_blank""#));
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(
            image_tag("/banner.png", Some("A \"title\""), Some(300)),
            r#"<img src="/banner.png" alt="A &quot;title&quot;" height="300">"#
        );
        assert_eq!(image_tag("/b.png", None, None), r#"<img src="/b.png" alt="">"#);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>Tom & Jerry's</b>"), "&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;");
    }
}
