//! HTML views: the input form and the post-generation confirmation page.

use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::document::blocks::{sections, SectionBody};
use crate::profile::ProfileRecord;

const FORM_HTML: &str = include_str!("../../templates/form.html");

/// GET /
pub async fn home_handler() -> Html<&'static str> {
    Html(FORM_HTML)
}

fn list_html(items: &[String]) -> String {
    if items.is_empty() {
        return "<p>-</p>".to_string();
    }
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str(&format!("<li>{}</li>", encode_text(item)));
    }
    html.push_str("</ul>");
    html
}

fn text_html(text: &str) -> String {
    if text.is_empty() {
        "<p>-</p>".to_string()
    } else {
        format!("<p>{}</p>", encode_text(text))
    }
}

/// Confirmation view echoing the normalized profile and linking the PDF.
pub fn confirmation_page(record: &ProfileRecord, file_name: &str) -> String {
    let href = format!("/download/{}", urlencoding::encode(file_name));

    let mut body = String::new();
    for (title, section) in sections(record) {
        body.push_str(&format!("<h2>{}</h2>", encode_text(title)));
        body.push_str(&match section {
            SectionBody::Text(text) => text_html(text),
            SectionBody::Items(items) => list_html(items),
        });
    }

    let contact = record
        .contact_line()
        .map(|c| format!("<p class=\"contact\">{}</p>", encode_text(&c)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} - Portfolio</title>
  <style>
    body {{ font-family: Helvetica, Arial, sans-serif; max-width: 720px; margin: 2rem auto; color: #222; }}
    h1 {{ color: #1f5a8a; margin-bottom: 0.2rem; }}
    h2 {{ color: #2b6fb3; font-size: 1.1rem; margin-bottom: 0.2rem; }}
    .contact {{ border-bottom: 1px solid #ccc; padding-bottom: 0.6rem; }}
    .download {{ display: inline-block; margin-top: 1.5rem; padding: 0.6rem 1.4rem; background: #1f5a8a; color: #fff; text-decoration: none; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  {contact}
  {body}
  <a class="download" href="{href}">Download {file_label}</a>
  <p><a href="/">Create another</a></p>
</body>
</html>
"#,
        title = encode_text(record.display_name()),
        contact = contact,
        body = body,
        href = encode_double_quoted_attribute(&href),
        file_label = encode_text(file_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_every_field() {
        for field in [
            "name",
            "email",
            "phone",
            "linkedin",
            "github",
            "website",
            "about",
            "skills",
            "education",
            "projects",
            "certifications",
            "achievements",
            "interests",
        ] {
            assert!(
                FORM_HTML.contains(&format!("name=\"{field}\"")),
                "form is missing field {field}"
            );
        }
        assert!(FORM_HTML.contains("action=\"/generate\""));
    }

    #[test]
    fn test_confirmation_links_download_and_escapes_input() {
        let record = ProfileRecord {
            name: "<script>alert(1)</script>".to_string(),
            skills: vec!["Rust & Go".to_string()],
            ..Default::default()
        };
        let html = confirmation_page(&record, "scriptalert1script.pdf");
        assert!(html.contains("href=\"/download/scriptalert1script.pdf\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<li>Rust &amp; Go</li>"));
    }

    #[test]
    fn test_confirmation_placeholders_for_empty_profile() {
        let html = confirmation_page(&ProfileRecord::default(), "portfolio.pdf");
        assert!(html.contains("<h1>Your Name</h1>"));
        assert_eq!(html.matches("<p>-</p>").count(), 7);
    }
}
