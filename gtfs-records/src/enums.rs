use serde::de::{Deserialize, Deserializer, Error as _};

/// Enumerations stored as an integer code in the GTFS files
///
/// An empty field decodes to the default value. An integer outside the reference
/// is kept (`Unknown`, or `Other` for [RouteType]), anything else fails.
pub trait GtfsCode: Copy + Default {
    /// The value matching `code`
    fn from_code(code: i32) -> Self;

    /// True when the code was not part of the reference
    fn is_unknown(&self) -> bool;

    /// The value itself, or the default one if it is unknown
    fn or_default(self) -> Self {
        if self.is_unknown() {
            Self::default()
        } else {
            self
        }
    }
}

fn decode<'de, D, E>(deserializer: D, enum_name: &str) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: GtfsCode,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(E::default());
    }
    raw.parse()
        .map(E::from_code)
        .map_err(|_| D::Error::custom(format!("{} must be an integer, got '{}'", enum_name, raw)))
}

macro_rules! gtfs_code {
    (
        $(#[$doc:meta])*
        $name:ident (default $default:ident) {
            $($(#[$variant_doc:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_doc])* $variant,)+
            /// A code outside the reference
            Unknown(i32),
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl GtfsCode for $name {
            fn from_code(code: i32) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }

            fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                decode(deserializer, stringify!($name))
            }
        }
    };
}

gtfs_code! {
    /// `location_type` of a [crate::Stop]
    LocationType (default StopPoint) {
        /// Where passengers board or alight, a platform when it has a parent station
        StopPoint = 0,
        /// A station grouping platforms
        StopArea = 1,
        /// Entrance or exit of a station
        StationEntrance = 2,
        /// Any other point of a station, used to link pathways
        GenericNode = 3,
        /// Part of a platform
        BoardingArea = 4,
    }
}

gtfs_code! {
    /// `pickup_type` and `drop_off_type` of a [crate::StopTime]
    PickupDropOffType (default Regular) {
        /// Scheduled
        Regular = 0,
        /// No pickup or drop off
        NotAvailable = 1,
        /// The agency must be phoned
        ArrangeByPhone = 2,
        /// Ask the driver
        CoordinateWithDriver = 3,
    }
}

gtfs_code! {
    /// Boarding or alighting anywhere along the path of the vehicle
    ContinuousPickupDropOff (default NotAvailable) {
        /// Allowed
        Continuous = 0,
        /// Not allowed
        NotAvailable = 1,
        /// The agency must be phoned
        ArrangeByPhone = 2,
        /// Ask the driver
        CoordinateWithDriver = 3,
    }
}

gtfs_code! {
    /// `timepoint` of a [crate::StopTime]
    TimepointType (default Exact) {
        /// Times are approximate or interpolated
        Approximate = 0,
        /// Times are strictly adhered to
        Exact = 1,
    }
}

gtfs_code! {
    /// Whether a service, such as wheelchair boarding, is provided
    Availability (default InformationNotAvailable) {
        /// Nobody knows
        InformationNotAvailable = 0,
        /// Provided
        Available = 1,
        /// Not provided
        NotAvailable = 2,
    }
}

gtfs_code! {
    /// `direction_id` of a [crate::Trip], for display only
    DirectionType (default Outbound) {
        /// One direction
        Outbound = 0,
        /// The opposite one
        Inbound = 1,
    }
}

gtfs_code! {
    /// `bikes_allowed` of a [crate::Trip]
    BikesAllowedType (default NoBikeInfo) {
        /// Nobody knows
        NoBikeInfo = 0,
        /// At least one bike fits in the vehicle
        AtLeastOneBike = 1,
        /// No bike
        NoBikesAllowed = 2,
    }
}

gtfs_code! {
    /// `transfer_type` of a [crate::Transfer]
    TransferType (default Recommended) {
        /// Preferred point to change between routes
        Recommended = 0,
        /// The departing vehicle waits for the arriving one
        Timed = 1,
        /// `min_transfer_time` is needed to change
        MinTime = 2,
        /// No transfer possible here
        Impossible = 3,
    }
}

/// `route_type` of a [crate::Route]
///
/// Codes of the extended route types (100 to 1599) are folded into the basic ones
/// when there is a match, see <https://developers.google.com/transit/gtfs/reference/extended-route-types>
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteType {
    /// Tram, streetcar or light rail
    Tramway,
    /// Subway or metro
    Subway,
    /// Intercity or long distance rail
    Rail,
    /// Bus
    Bus,
    /// Boat
    Ferry,
    /// Street level cable car
    CableCar,
    /// Aerial lift
    Gondola,
    /// Rail on steep inclines
    Funicular,
    /// (extended) Intercity bus
    Coach,
    /// (extended) Airplane
    Air,
    /// (extended) Taxi
    Taxi,
    /// Any other code
    Other(i32),
}

impl Default for RouteType {
    fn default() -> Self {
        RouteType::Bus
    }
}

impl GtfsCode for RouteType {
    fn from_code(code: i32) -> Self {
        use RouteType::*;
        match code {
            0 | 900..=999 => Tramway,
            1 | 400..=499 => Subway,
            2 | 100..=199 => Rail,
            3 | 700..=899 => Bus,
            4 | 1000..=1099 | 1200..=1299 => Ferry,
            5 => CableCar,
            6 | 1300..=1399 => Gondola,
            7 | 1400..=1499 => Funicular,
            200..=299 => Coach,
            1100..=1199 => Air,
            1500..=1599 => Taxi,
            other => Other(other),
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, RouteType::Other(_))
    }
}

impl<'de> Deserialize<'de> for RouteType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, "RouteType")
    }
}
