/**
 * Site Pages
 *
 * Home, about, artwork gallery and error pages.
 */
use std::fmt::Write;

use crate::backend::artworks::Artwork;
use crate::backend::views::layout::{escape, render};

pub fn home() -> String {
    render(
        "Spotbook",
        r#"    <section class="hero">
      <h1>Spotbook</h1>
      <p>Pick a spot, reserve it, and get it straight into your calendar.</p>
      <p>Looking for a calendar you were invited to? Open the link you received,
         or ask for it again below.</p>
    </section>
    <section>
      <h2>Forgot your calendar link?</h2>
      <form class="json-form" data-endpoint="/local/calendar/forgotten" data-method="POST">
        <label>Email <input type="email" name="visitorEmail" required></label>
        <button type="submit">Send me my links</button>
        <p class="form-status" role="status"></p>
      </form>
    </section>
"#,
    )
}

pub fn about() -> String {
    render(
        "About",
        r#"    <section>
      <h1>About</h1>
      <p>Spotbook publishes calendars of bookable spots. Visitors reserve a spot
         without an account, cancel it from the confirmation page, or join a
         waitlist when everything is taken.</p>
      <p>Some calendars are private. Those are opened with a personal link sent
         by email; the browser remembers the access for thirty days.</p>
    </section>
"#,
    )
}

/// Gallery of uploaded artworks, newest first
pub fn artworks(items: &[Artwork]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "    <section>");
    let _ = writeln!(body, "      <h1>Artwork Gallery</h1>");
    let _ = writeln!(
        body,
        "      <p class=\"count\">{} artwork{}</p>",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    );

    if items.is_empty() {
        let _ = writeln!(body, "      <p>No artworks uploaded yet.</p>");
    } else {
        let _ = writeln!(body, "      <ul class=\"gallery\">");
        for item in items {
            let _ = writeln!(
                body,
                "        <li><figure><img src=\"{url}\" alt=\"{name}\" loading=\"lazy\">\
                 <figcaption>{name} <time datetime=\"{iso}\">{date}</time> ({kb} KB)</figcaption></figure></li>",
                url = escape(&item.url),
                name = escape(&item.filename),
                iso = item.uploaded_at.to_rfc3339(),
                date = item.uploaded_at.format("%Y-%m-%d %H:%M"),
                kb = item.size.div_ceil(1024),
            );
        }
        let _ = writeln!(body, "      </ul>");
    }

    let _ = writeln!(
        body,
        r#"      <h2>Upload</h2>
      <form id="artwork-upload" action="/local/artworks/upload" method="post" enctype="multipart/form-data">
        <input type="file" name="artwork" accept="image/png" required>
        <button type="submit">Upload PNG</button>
        <p class="form-status" role="status"></p>
      </form>
    </section>"#
    );
    render("Artwork Gallery", &body)
}

/// Not-found and error page
pub fn error_page(title: &str, message: Option<&str>) -> String {
    let message = message.unwrap_or("The page you are looking for does not exist.");
    let body = format!(
        "    <section class=\"error\">\n      <h1>{}</h1>\n      <p>{}</p>\n      <p><a href=\"/\">Back to the home page</a></p>\n    </section>\n",
        escape(title),
        escape(message)
    );
    render(title, &body)
}
