pub use crate::enums::*;
use crate::fields;
use chrono::{Datelike, NaiveDate};
use rgb::RGB8;

use std::fmt;

/// Records referenced by other records through a technical identifier
pub trait Id {
    /// The identifier, never meant for travellers
    fn id(&self) -> &str;
}

macro_rules! impl_id {
    ($($record:ty),+) => {
        $(impl Id for $record {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_id!(Calendar, Route, Stop, Trip);

/// One row of `agency.txt`
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Agency {
    /// `agency_id`, optional when the feed has a single agency
    #[serde(rename = "agency_id")]
    pub id: Option<String>,
    /// `agency_name`
    #[serde(rename = "agency_name")]
    pub name: String,
    /// `agency_url`
    #[serde(rename = "agency_url")]
    pub url: String,
    /// `agency_timezone`, a tz database name such as `Europe/Paris`
    #[serde(rename = "agency_timezone")]
    pub timezone: String,
    /// `agency_lang`
    #[serde(rename = "agency_lang")]
    pub lang: Option<String>,
    /// `agency_phone`
    #[serde(rename = "agency_phone")]
    pub phone: Option<String>,
    /// `agency_fare_url`
    #[serde(rename = "agency_fare_url")]
    pub fare_url: Option<String>,
    /// `agency_email`
    #[serde(rename = "agency_email")]
    pub email: Option<String>,
}

impl Id for Agency {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One row of `calendar.txt`: the weekdays a service runs on, between two dates
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Calendar {
    /// `service_id`
    #[serde(rename = "service_id")]
    pub id: String,
    /// Runs on mondays
    #[serde(deserialize_with = "fields::flag")]
    pub monday: bool,
    /// Runs on tuesdays
    #[serde(deserialize_with = "fields::flag")]
    pub tuesday: bool,
    /// Runs on wednesdays
    #[serde(deserialize_with = "fields::flag")]
    pub wednesday: bool,
    /// Runs on thursdays
    #[serde(deserialize_with = "fields::flag")]
    pub thursday: bool,
    /// Runs on fridays
    #[serde(deserialize_with = "fields::flag")]
    pub friday: bool,
    /// Runs on saturdays
    #[serde(deserialize_with = "fields::flag")]
    pub saturday: bool,
    /// Runs on sundays
    #[serde(deserialize_with = "fields::flag")]
    pub sunday: bool,
    /// First day of service
    #[serde(deserialize_with = "fields::date")]
    pub start_date: NaiveDate,
    /// Last day of service, included
    #[serde(deserialize_with = "fields::date")]
    pub end_date: NaiveDate,
}

impl Calendar {
    /// The service runs on this day of the week, whatever the dates of the calendar
    pub fn valid_weekday(&self, date: NaiveDate) -> bool {
        let days = [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ];
        days[date.weekday().num_days_from_monday() as usize]
    }

    /// The service runs on `date`
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.end_date).contains(&date) && self.valid_weekday(date)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} to {})", self.id, self.start_date, self.end_date)
    }
}

/// One row of `routes.txt`, a line as riders know it
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Route {
    /// `route_id`
    #[serde(rename = "route_id")]
    pub id: String,
    /// `route_short_name`, such as "32" or "Green"
    #[serde(rename = "route_short_name", default)]
    pub short_name: String,
    /// `route_long_name`
    #[serde(rename = "route_long_name", default)]
    pub long_name: String,
    /// `route_desc`
    #[serde(rename = "route_desc")]
    pub desc: Option<String>,
    /// Mode of transport
    pub route_type: RouteType,
    /// `route_url`
    #[serde(rename = "route_url")]
    pub url: Option<String>,
    /// Operating [Agency], may be omitted with a single agency
    pub agency_id: Option<String>,
    /// `route_sort_order`, smaller first
    #[serde(rename = "route_sort_order")]
    pub order: Option<u32>,
    /// `route_color`, white when empty
    #[serde(
        rename = "route_color",
        default = "fields::white",
        deserialize_with = "fields::route_color"
    )]
    pub color: RGB8,
    /// `route_text_color`, black when empty
    #[serde(
        rename = "route_text_color",
        default,
        deserialize_with = "fields::route_text_color"
    )]
    pub text_color: RGB8,
    /// Boarding anywhere along the path, for every trip of the route
    #[serde(default)]
    pub continuous_pickup: ContinuousPickupDropOff,
    /// Alighting anywhere along the path, for every trip of the route
    #[serde(default)]
    pub continuous_drop_off: ContinuousPickupDropOff,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.long_name.as_str() {
            "" => f.write_str(&self.short_name),
            long_name => f.write_str(long_name),
        }
    }
}

/// One row of `stops.txt`: a stop, a station or any other location of a station
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Stop {
    /// `stop_id`
    #[serde(rename = "stop_id")]
    pub id: String,
    /// `stop_code`, shown to riders
    #[serde(rename = "stop_code")]
    pub code: Option<String>,
    /// `stop_name`, empty for generic nodes and boarding areas
    #[serde(rename = "stop_name", default)]
    pub name: String,
    /// `stop_desc`
    #[serde(rename = "stop_desc", default)]
    pub description: String,
    /// Kind of location
    #[serde(default)]
    pub location_type: LocationType,
    /// `stop_id` of the enclosing station
    pub parent_station: Option<String>,
    /// Fare zone
    pub zone_id: Option<String>,
    /// `stop_url`
    #[serde(rename = "stop_url")]
    pub url: Option<String>,
    /// `stop_lon`, WGS84
    #[serde(rename = "stop_lon", default)]
    pub longitude: Option<f64>,
    /// `stop_lat`, WGS84
    #[serde(rename = "stop_lat", default)]
    pub latitude: Option<f64>,
    /// `stop_timezone`, the agency one when missing
    #[serde(rename = "stop_timezone")]
    pub timezone: Option<String>,
    /// Wheelchair boarding from this location
    #[serde(default)]
    pub wheelchair_boarding: Availability,
    /// Level inside the station
    pub level_id: Option<String>,
    /// Platform identifier, such as "G" or "3"
    pub platform_code: Option<String>,
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One row of `stop_times.txt`: a [Trip] calling at a [Stop]
///
/// Times are seconds since midnight of the service day, so they can go past 24h.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct StopTime {
    /// The calling [Trip]
    pub trip_id: String,
    /// Empty for stops whose time is interpolated
    #[serde(default, deserialize_with = "fields::optional_time")]
    pub arrival_time: Option<u32>,
    /// Empty for stops whose time is interpolated
    #[serde(default, deserialize_with = "fields::optional_time")]
    pub departure_time: Option<u32>,
    /// The [Stop] called at
    pub stop_id: String,
    /// Increases along the trip, not necessarily by one
    pub stop_sequence: u32,
    /// Overrides the headsign of the trip from this stop on
    pub stop_headsign: Option<String>,
    /// How riders board
    #[serde(default)]
    pub pickup_type: PickupDropOffType,
    /// How riders alight
    #[serde(default)]
    pub drop_off_type: PickupDropOffType,
    /// Boarding anywhere between this stop and the next one
    #[serde(default)]
    pub continuous_pickup: ContinuousPickupDropOff,
    /// Alighting anywhere between this stop and the next one
    #[serde(default)]
    pub continuous_drop_off: ContinuousPickupDropOff,
    /// Distance from the first stop along the shape of the trip
    pub shape_dist_traveled: Option<f32>,
    /// Exact or approximate times
    #[serde(default)]
    pub timepoint: TimepointType,
}

impl fmt::Display for StopTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{} at {}", self.trip_id, self.stop_sequence, self.stop_id)
    }
}

/// One row of `transfers.txt`
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Transfer {
    /// Stop the rider comes from
    pub from_stop_id: String,
    /// Stop the rider goes to
    pub to_stop_id: String,
    /// Kind of transfer
    #[serde(default)]
    pub transfer_type: TransferType,
    /// Seconds, with [TransferType::MinTime]
    pub min_transfer_time: Option<u32>,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.from_stop_id, self.to_stop_id)
    }
}

/// One row of `trips.txt`: a journey of a vehicle along a [Route] for a service
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Trip {
    /// `trip_id`
    #[serde(rename = "trip_id")]
    pub id: String,
    /// The [Calendar] of the trip
    pub service_id: String,
    /// The [Route] of the trip
    pub route_id: String,
    /// Path of the vehicle, from `shapes.txt`
    pub shape_id: Option<String>,
    /// Destination shown to riders
    pub trip_headsign: Option<String>,
    /// Rider facing number, for instance a train number
    pub trip_short_name: Option<String>,
    /// Direction, for display
    pub direction_id: Option<DirectionType>,
    /// Trips made in sequence by the same vehicle share a block
    pub block_id: Option<String>,
    /// Room for a wheelchair
    #[serde(default)]
    pub wheelchair_accessible: Availability,
    /// Room for a bike
    #[serde(default)]
    pub bikes_allowed: BikesAllowedType,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.trip_headsign {
            Some(headsign) => write!(f, "{} to {}", self.id, headsign),
            None => f.write_str(&self.id),
        }
    }
}
