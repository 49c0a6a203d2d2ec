/**
 * Calendar Pages
 *
 * The calendar itself (spots grouped by the backend, with reserve links and
 * waitlist forms) and the access-request page shown for restricted
 * calendars when the visitor holds no grant.
 */
use std::fmt::Write;

use crate::backend::views::layout::{escape, link, render};
use crate::shared::calendar::{Calendar, Spot, SpotGroup, DEFAULT_TIMEZONE};

fn spot_item(out: &mut String, slug: &str, timezone: &str, spot: &Spot) {
    let start = spot.start_date.as_deref().unwrap_or_default();
    let end = spot.end_date.as_deref().unwrap_or_default();
    let location = spot.location.as_deref().unwrap_or_default();
    let title = spot.title.as_deref().unwrap_or(location);

    let _ = write!(
        out,
        "        <li class=\"spot{}\">\n          <span class=\"spot-title\">{}</span>\n          <time datetime=\"{}\">{}</time>",
        if spot.available() { "" } else { " taken" },
        escape(title),
        escape(start),
        escape(start),
    );
    if !end.is_empty() {
        let _ = write!(out, " &ndash; <time datetime=\"{0}\">{0}</time>", escape(end));
    }
    out.push('\n');

    let Some(id) = spot.id.as_deref() else {
        let _ = writeln!(out, "        </li>");
        return;
    };

    if spot.available() {
        let href = link(
            &["reserve", id],
            &[
                ("startDate", start),
                ("endDate", end),
                ("location", location),
                ("timezone", timezone),
            ],
        );
        let _ = writeln!(
            out,
            "          <a class=\"button\" href=\"{}\">Reserve</a>",
            escape(&href)
        );
    } else {
        let _ = writeln!(
            out,
            r#"          <details class="waitlist">
            <summary>Join the waitlist</summary>
            <form class="json-form" data-endpoint="/local/waitlist/join" data-method="POST">
              <input type="hidden" name="calendarURL" value="{slug}">
              <input type="hidden" name="spotId" value="{id}">
              <input type="hidden" name="timezone" value="{tz}">
              <input type="hidden" name="startDate" value="{start}">
              <input type="hidden" name="endDate" value="{end}">
              <label>Name <input type="text" name="visitorName" minlength="2" required></label>
              <label>Email <input type="email" name="visitorEmail" required></label>
              <label>Comment <textarea name="comment"></textarea></label>
              <button type="submit">Notify me</button>
              <p class="form-status" role="status"></p>
            </form>
          </details>"#,
            slug = escape(slug),
            id = escape(id),
            tz = escape(timezone),
            start = escape(start),
            end = escape(end),
        );
    }
    let _ = writeln!(out, "        </li>");
}

/// Calendar content page
pub fn calendar(calendar: &Calendar, slug: &str, groups: &[SpotGroup]) -> String {
    let timezone = calendar.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
    let mut body = String::new();
    let _ = writeln!(body, "    <section class=\"calendar\">");
    let _ = writeln!(body, "      <h1>{}</h1>", escape(&calendar.name));
    if let Some(description) = calendar.description.as_deref() {
        let _ = writeln!(body, "      <p class=\"description\">{}</p>", escape(description));
    }

    if groups.iter().all(|group| group.spots.is_empty()) {
        let _ = writeln!(body, "      <p>No spots are open right now. Check back soon.</p>");
    }
    for group in groups.iter().filter(|group| !group.spots.is_empty()) {
        if !group.label.is_empty() {
            let _ = writeln!(body, "      <h2>{}</h2>", escape(&group.label));
        }
        let _ = writeln!(body, "      <ul class=\"spots\">");
        for spot in &group.spots {
            spot_item(&mut body, slug, timezone, spot);
        }
        let _ = writeln!(body, "      </ul>");
    }
    let _ = writeln!(body, "    </section>");

    render(&calendar.name, &body)
}

/// Access-request page for a restricted calendar
pub fn challenge(calendar: &Calendar, slug: &str, token_rejected: bool) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "    <section class=\"challenge\">");
    let _ = writeln!(body, "      <h1>{}</h1>", escape(&calendar.name));
    if token_rejected {
        let _ = writeln!(
            body,
            "      <p class=\"notice\">This access link is no longer valid. Request a new one below.</p>"
        );
    }
    let _ = writeln!(
        body,
        r#"      <p>This calendar is private. Enter the email address it was shared with
         to open it on this device.</p>
      <form class="json-form" data-endpoint="/local/calendar/validate-access" data-method="POST" data-reload="true">
        <input type="hidden" name="calendarURL" value="{slug}">
        <label>Email <input type="email" name="visitorEmail" required></label>
        <button type="submit">Request access</button>
        <p class="form-status" role="status"></p>
      </form>
    </section>"#,
        slug = escape(slug),
    );

    render(&calendar.name, &body)
}
