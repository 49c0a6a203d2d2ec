/**
 * Calendar Data Structures
 *
 * Per-request snapshots of calendar data fetched from the booking backend.
 * The front end never stores these; they only live for the duration of a
 * page render.
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name the backend gives its placeholder calendar. A calendar with this
/// exact name is never shown to visitors.
pub const SAMPLE_CALENDAR_NAME: &str = "Sample Calendar";

/// Owner timezone assumed when neither the calendar nor the link names one
pub const DEFAULT_TIMEZONE: &str = "Europe/Amsterdam";

/// Calendar lookup response: `GET calendar/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub calendar: Calendar,
    /// Spots grouped by the backend (usually by day). Kept opaque and
    /// interpreted leniently by the view.
    #[serde(rename = "groupedSpots", default)]
    pub grouped_spots: Value,
}

/// A bookable calendar, identified by its URL slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Calendar {
    /// Display name
    pub name: String,
    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owner timezone, used as the default for reservation forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Whether viewing requires an access grant
    #[serde(rename = "isRestricted", default)]
    pub is_restricted: bool,
}

impl Calendar {
    /// Whether this is the backend's placeholder calendar
    pub fn is_placeholder(&self) -> bool {
        self.name == SAMPLE_CALENDAR_NAME
    }
}

/// A single bookable spot as rendered on the calendar page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spot {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Backend availability flag; spots without it are treated as available
    #[serde(rename = "isAvailable", default)]
    pub is_available: Option<bool>,
}

impl Spot {
    pub fn available(&self) -> bool {
        self.is_available.unwrap_or(true)
    }
}

/// A titled group of spots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotGroup {
    pub label: String,
    pub spots: Vec<Spot>,
}

/// Interpret `groupedSpots` as a list of titled groups.
///
/// Accepts an object mapping labels to spot arrays, or a flat array of spots
/// (one unlabeled group). Items that do not look like spots are skipped.
pub fn spot_groups(grouped: &Value) -> Vec<SpotGroup> {
    fn spots_of(items: &[Value]) -> Vec<Spot> {
        items
            .iter()
            .filter_map(|item| serde_json::from_value::<Spot>(item.clone()).ok())
            .collect()
    }

    match grouped {
        Value::Object(map) => map
            .iter()
            .filter_map(|(label, items)| {
                items.as_array().map(|items| SpotGroup {
                    label: label.clone(),
                    spots: spots_of(items),
                })
            })
            .collect(),
        Value::Array(items) => vec![SpotGroup {
            label: String::new(),
            spots: spots_of(items),
        }],
        _ => Vec::new(),
    }
}
