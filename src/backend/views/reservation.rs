/**
 * Reservation Pages
 *
 * The reservation form for a single spot and the reservation detail page
 * (with calendar-file link and cancellation form).
 */
use std::fmt::Write;

use crate::backend::views::layout::{escape, link, render};
use crate::shared::reservation::{ReservationDetail, ReserveFormQuery};

fn row(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        let _ = writeln!(
            out,
            "        <dt>{}</dt><dd>{}</dd>",
            escape(label),
            escape(value)
        );
    }
}

/// Reservation form for spot `spot_id`
pub fn reserve_form(spot_id: &str, query: &ReserveFormQuery) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "    <section class=\"reserve\">");
    let _ = writeln!(body, "      <h1>Reserve Spot</h1>");
    let _ = writeln!(body, "      <dl>");
    row(&mut body, "Location", query.location.as_deref());
    row(&mut body, "Starts", query.start_date.as_deref());
    row(&mut body, "Ends", query.end_date.as_deref());
    row(&mut body, "Times shown in", Some(query.owner_timezone()));
    let _ = writeln!(body, "      </dl>");
    let _ = writeln!(
        body,
        r#"      <form class="json-form" data-endpoint="/local/reserve" data-method="POST" data-redirect="/reservation/{{id}}">
        <input type="hidden" name="spotId" value="{spot}">
        <input type="hidden" name="timezone" value="{tz}">
        <label>Name <input type="text" name="visitorName" minlength="2" required></label>
        <label>Email <input type="email" name="visitorEmail" required></label>
        <label>Comment <textarea name="comment"></textarea></label>
        <button type="submit">Reserve</button>
        <p class="form-status" role="status"></p>
      </form>
    </section>"#,
        spot = escape(spot_id),
        tz = escape(query.owner_timezone()),
    );
    render("Reserve Spot", &body)
}

/// Reservation detail page
pub fn detail(detail: &ReservationDetail, ics_url: Option<&str>) -> String {
    let reservation = &detail.reservation;
    let visitor = reservation.visitor.as_ref();
    let spot = detail.spot.as_ref();
    let calendar = detail.calendar.as_ref();

    let mut body = String::new();
    let _ = writeln!(body, "    <section class=\"reservation\">");
    let _ = writeln!(body, "      <h1>Reservation Details</h1>");
    let _ = writeln!(body, "      <dl>");
    row(&mut body, "Calendar", calendar.and_then(|c| c.name.as_deref()));
    row(&mut body, "Status", reservation.status.as_deref());
    row(&mut body, "Name", visitor.and_then(|v| v.name.as_deref()));
    row(&mut body, "Email", visitor.and_then(|v| v.email.as_deref()));
    row(&mut body, "Location", spot.and_then(|s| s.location.as_deref()));
    row(
        &mut body,
        "Starts",
        reservation
            .best_guess_start_date
            .as_deref()
            .or(spot.and_then(|s| s.start_date.as_deref())),
    );
    row(
        &mut body,
        "Ends",
        reservation
            .best_guess_end_date
            .as_deref()
            .or(spot.and_then(|s| s.end_date.as_deref())),
    );
    row(&mut body, "Comment", reservation.comment.as_deref());
    let _ = writeln!(body, "      </dl>");

    if let Some(ics_url) = ics_url {
        let _ = writeln!(
            body,
            "      <p><a class=\"button\" href=\"{}\">Add to calendar</a></p>",
            escape(ics_url)
        );
    }

    let _ = writeln!(
        body,
        r#"      <h2>Cancel this reservation</h2>
      <form class="json-form" data-endpoint="{endpoint}" data-method="DELETE">
        <label>Reason (optional) <textarea name="reason"></textarea></label>
        <button type="submit">Cancel reservation</button>
        <p class="form-status" role="status"></p>
      </form>
    </section>"#,
        endpoint = escape(&link(&["local", "reservation", "delete", &reservation.id], &[])),
    );
    render("Reservation Details", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserve_form_defaults_timezone() {
        let html = reserve_form("s1", &ReserveFormQuery::default());
        assert!(html.contains("name=\"spotId\" value=\"s1\""));
        assert!(html.contains("Europe/Amsterdam"));
        assert!(html.contains("/reservation/{id}"));
    }

    #[test]
    fn test_detail_renders_fields() {
        let detail: ReservationDetail = serde_json::from_value(json!({
            "reservation": {
                "id": "r1",
                "visitor": {"name": "Alice", "email": "alice@example.com"},
                "bestGuessStartDate": "2026-03-01T09:00:00Z"
            },
            "calendar": {"name": "Pool A"}
        }))
        .unwrap();

        let html = super::detail(&detail, Some("https://api.example.com/ics/r1"));
        assert!(html.contains("<dd>Alice</dd>"));
        assert!(html.contains("<dd>Pool A</dd>"));
        assert!(html.contains("/local/reservation/delete/r1"));
        assert!(html.contains("href=\"https://api.example.com/ics/r1\""));
    }
}
