/**
 * Page Layout
 *
 * Shared document shell (head, navigation, footer) and HTML escaping.
 * Every value that did not originate in this crate must pass through
 * `escape` before it is written into markup.
 */
use std::fmt::Write;

use reqwest::Url;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build a site-relative link with percent-encoded path segments and query
pub fn link(segments: &[&str], query: &[(&str, &str)]) -> String {
    // Base is only a vehicle for the encoder; it never reaches the page.
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return "/".to_string();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}

/// Wrap `body` in the site chrome
pub fn render(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
  <header class="site-header">
    <nav>
      <a href="/">Home</a>
      <a href="/artworks">Artworks</a>
      <a href="/about">About</a>
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer class="site-footer"><p>Spotbook</p></footer>
  <script src="/static/js/forms.js" defer></script>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_link_encodes() {
        assert_eq!(link(&["reserve", "s 1"], &[]), "/reserve/s%201");
        assert_eq!(
            link(&["reserve", "s1"], &[("location", "Pool & Spa")]),
            "/reserve/s1?location=Pool+%26+Spa"
        );
    }

    #[test]
    fn test_title_escaped() {
        let html = render("<b>", "<p>ok</p>");
        assert!(html.contains("<title>&lt;b&gt;</title>"));
        assert!(html.contains("<p>ok</p>"));
    }
}
