//! Catalog records: monasteries and the events they host.

use chrono::NaiveDate;
use common::{EventId, MonasteryId};
use serde::{Deserialize, Serialize};

use crate::fields;

/// Contact details for a monastery. Either part may be unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// A cataloged monastery.
///
/// `id`, `name` and `region` are required; every other field falls back to
/// an "unavailable" value when missing or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monastery {
    pub id: MonasteryId,
    pub name: String,
    pub region: String,
    #[serde(
        default,
        deserialize_with = "fields::coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "fields::coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "fields::text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "fields::year",
        skip_serializing_if = "Option::is_none"
    )]
    pub established_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub altitude: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub visiting_hours: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_fee: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessibility: Option<String>,
    #[serde(default, deserialize_with = "fields::flag")]
    pub audio_guide_available: bool,
    #[serde(
        default,
        deserialize_with = "fields::non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_tour_url: Option<String>,
    #[serde(default, deserialize_with = "fields::string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "fields::string_list")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "fields::string_list")]
    pub nearby_attractions: Vec<String>,
    #[serde(default, deserialize_with = "fields::contact")]
    pub contact_info: ContactInfo,
}

impl Monastery {
    /// Creates a monastery with only its identity fields set.
    pub fn new(id: MonasteryId, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            latitude: None,
            longitude: None,
            description: String::new(),
            established_year: None,
            altitude: None,
            visiting_hours: None,
            entry_fee: None,
            accessibility: None,
            audio_guide_available: false,
            virtual_tour_url: None,
            images: Vec::new(),
            highlights: Vec::new(),
            nearby_attractions: Vec::new(),
            contact_info: ContactInfo::default(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the virtual tour URL. A blank URL leaves the tour unavailable.
    pub fn with_virtual_tour(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.virtual_tour_url = (!url.trim().is_empty()).then(|| url.trim().to_string());
        self
    }

    /// Sets the map coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Returns `(latitude, longitude)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Returns true if a virtual tour can be launched for this monastery.
    pub fn has_virtual_tour(&self) -> bool {
        self.virtual_tour_url.is_some()
    }
}

/// A scheduled occurrence hosted by a monastery.
///
/// `monastery_id` is a reference into the monastery collection that is not
/// checked for existence; `monastery_name` is a display copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub monastery_id: MonasteryId,
    pub name: String,
    #[serde(deserialize_with = "fields::event_date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "fields::text")]
    pub description: String,
    #[serde(default, deserialize_with = "fields::flag")]
    pub registration_required: bool,
    #[serde(default, deserialize_with = "fields::text")]
    pub monastery_name: String,
}

impl Event {
    /// Creates an event with the required fields set.
    pub fn new(
        id: EventId,
        monastery_id: MonasteryId,
        name: impl Into<String>,
        date: NaiveDate,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            monastery_id,
            name: name.into(),
            date,
            kind: kind.into(),
            description: String::new(),
            registration_required: false,
            monastery_name: String::new(),
        }
    }

    /// Sets the denormalized monastery name.
    pub fn with_monastery_name(mut self, name: impl Into<String>) -> Self {
        self.monastery_name = name.into();
        self
    }

    /// Returns true if the event falls on or after `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}
