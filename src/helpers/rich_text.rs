//! Rich text to HTML serialization

use super::html::{html_escape, push_escaped};
use crate::content::{Span, TextSegment};

/// Render a rich-text body as HTML
///
/// Consecutive list items are wrapped in a single `<ul>` or `<ol>`.
pub fn as_html(body: &[TextSegment]) -> String {
    let mut out = String::new();
    let mut open_list: Option<&'static str> = None;

    for segment in body {
        let list = match segment.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };

        if open_list != list {
            if let Some(tag) = open_list {
                out.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list {
                out.push_str(&format!("<{}>", tag));
            }
            open_list = list;
        }

        out.push_str(&render_segment(segment));
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{}>", tag));
    }

    out
}

fn render_segment(segment: &TextSegment) -> String {
    let inner = || render_spans(&segment.text, &segment.spans);

    match segment.kind.as_str() {
        kind @ ("heading1" | "heading2" | "heading3" | "heading4" | "heading5" | "heading6") => {
            let tag = format!("h{}", &kind["heading".len()..]);
            format!("<{0}>{1}</{0}>", tag, inner())
        }
        "preformatted" => format!("<pre>{}</pre>", inner()),
        "list-item" | "o-list-item" => format!("<li>{}</li>", inner()),
        "image" => match &segment.url {
            Some(url) => format!(
                r#"<p class="block-img"><img src="{}" alt="{}" /></p>"#,
                html_escape(url),
                html_escape(segment.alt.as_deref().unwrap_or(""))
            ),
            None => String::new(),
        },
        "embed" => {
            tracing::debug!("Skipping embed segment");
            String::new()
        }
        _ => format!("<p>{}</p>", inner()),
    }
}

/// Apply inline spans to a text, escaping it along the way
///
/// Span offsets are character positions. Overlapping spans are closed and
/// reopened so the output stays well nested.
fn render_spans(text: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut sorted: Vec<&Span> = spans.iter().filter(|s| s.end > s.start).collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out = String::with_capacity(text.len());
    let mut open: Vec<&Span> = Vec::new();

    for i in 0..=chars.len() {
        while let Some(pos) = open.iter().rposition(|s| s.end <= i) {
            let closing = open[pos];
            let reopen = open.split_off(pos + 1);
            for span in reopen.iter().rev() {
                out.push_str(&close_tag(span));
            }
            out.push_str(&close_tag(closing));
            open.truncate(pos);
            for span in reopen {
                out.push_str(&open_tag(span));
                open.push(span);
            }
        }

        let Some(&c) = chars.get(i) else {
            break;
        };

        for span in sorted.iter().filter(|s| s.start == i) {
            out.push_str(&open_tag(span));
            open.push(*span);
        }

        if c == '\n' {
            out.push_str("<br />");
        } else {
            push_escaped(&mut out, c);
        }
    }

    for span in open.iter().rev() {
        out.push_str(&close_tag(span));
    }

    out
}

fn open_tag(span: &Span) -> String {
    match span.kind.as_str() {
        "strong" => "<strong>".to_string(),
        "em" => "<em>".to_string(),
        "hyperlink" => {
            let data = span.data.as_ref();
            let url = data
                .and_then(|d| d.get("url"))
                .and_then(|u| u.as_str())
                .unwrap_or("#");
            let blank = data
                .and_then(|d| d.get("target"))
                .and_then(|t| t.as_str())
                == Some("_blank");
            if blank {
                format!(
                    r#"<a target="_blank" rel="noopener noreferrer" href="{}">"#,
                    html_escape(url)
                )
            } else {
                format!(r#"<a href="{}">"#, html_escape(url))
            }
        }
        "label" => {
            let label = span
                .data
                .as_ref()
                .and_then(|d| d.get("label"))
                .and_then(|l| l.as_str())
                .unwrap_or("");
            format!(r#"<span class="{}">"#, html_escape(label))
        }
        _ => "<span>".to_string(),
    }
}

fn close_tag(span: &Span) -> String {
    match span.kind.as_str() {
        "strong" => "</strong>",
        "em" => "</em>",
        "hyperlink" => "</a>",
        _ => "</span>",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segment(kind: &str, text: &str, spans: Vec<Span>) -> TextSegment {
        TextSegment {
            kind: kind.to_string(),
            text: text.to_string(),
            spans,
            ..Default::default()
        }
    }

    fn span(kind: &str, start: usize, end: usize) -> Span {
        Span {
            start,
            end,
            kind: kind.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_paragraphs_and_headings() {
        let body = vec![
            TextSegment::paragraph("Hello <world>"),
            segment("heading3", "Title", vec![]),
            segment("preformatted", "let x = 1;", vec![]),
        ];
        assert_eq!(
            as_html(&body),
            "<p>Hello &lt;world&gt;</p><h3>Title</h3><pre>let x = 1;</pre>"
        );
    }

    #[test]
    fn test_lists_are_grouped() {
        let body = vec![
            segment("list-item", "one", vec![]),
            segment("list-item", "two", vec![]),
            segment("o-list-item", "first", vec![]),
            TextSegment::paragraph("after"),
        ];
        assert_eq!(
            as_html(&body),
            "<ul><li>one</li><li>two</li></ul><ol><li>first</li></ol><p>after</p>"
        );
    }

    #[test]
    fn test_spans() {
        let body = vec![segment(
            "paragraph",
            "bold and italic",
            vec![span("strong", 0, 4), span("em", 9, 15)],
        )];
        assert_eq!(
            as_html(&body),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_nested_and_overlapping_spans() {
        let nested = render_spans("abcdef", &[span("strong", 0, 6), span("em", 2, 4)]);
        assert_eq!(nested, "<strong>ab<em>cd</em>ef</strong>");

        let overlapping = render_spans("abcdef", &[span("strong", 0, 4), span("em", 2, 6)]);
        assert_eq!(
            overlapping,
            "<strong>ab<em>cd</em></strong><em>ef</em>"
        );
    }

    #[test]
    fn test_hyperlink() {
        let mut link = span("hyperlink", 0, 4);
        link.data = Some(json!({ "link_type": "Web", "url": "https://prismic.io", "target": "_blank" }));
        assert_eq!(
            render_spans("docs", &[link]),
            r#"<a target="_blank" rel="noopener noreferrer" href="https://prismic.io">docs</a>"#
        );
    }

    #[test]
    fn test_multibyte_offsets_and_newlines() {
        let html = render_spans("ação\nfim", &[span("em", 0, 4)]);
        assert_eq!(html, "<em>ação</em><br />fim");
    }

    #[test]
    fn test_image_segment() {
        let image = TextSegment {
            kind: "image".to_string(),
            url: Some("https://images.prismic.io/x.png".to_string()),
            alt: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            as_html(&[image]),
            r#"<p class="block-img"><img src="https://images.prismic.io/x.png" alt="x" /></p>"#
        );
    }
}
