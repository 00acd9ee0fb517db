use gtfs_records::*;

/// One GTFS feed, loaded from a single directory
///
/// Every collection holds one record per row of its file, in file order.
/// A file that was not present in the directory gives an empty collection.
///
/// A feed is built by [crate::FeedLoader] (or [crate::load_feed]) and never modified afterwards;
/// loading the directory again is the only way to get a fresh view of it.
///
/// ```no_run
/// let feed = gtfs_loader::load_feed("fixtures/basic")?;
/// println!("{} is running {} trips", feed.agency, feed.trips.len());
/// # Ok::<(), gtfs_loader::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Feed {
    /// Directory the feed was loaded from
    pub root_path: String,
    /// Time needed to read and parse the directory in milliseconds
    pub read_duration: i64,
    /// First agency of `agency.txt`, the default [Agency] if there is none
    pub agency: Agency,
    /// All rows of `calendar.txt`
    pub calendars: Vec<Calendar>,
    /// All rows of `routes.txt`
    pub routes: Vec<Route>,
    /// All rows of `stops.txt`
    pub stops: Vec<Stop>,
    /// All rows of `stop_times.txt`
    pub stop_times: Vec<StopTime>,
    /// All rows of `transfers.txt`
    pub transfers: Vec<Transfer>,
    /// All rows of `trips.txt`
    pub trips: Vec<Trip>,
}

impl Feed {
    pub(crate) fn new(root_path: String) -> Self {
        Self {
            root_path,
            ..Default::default()
        }
    }

    /// Prints on stdout some basic statistics about the feed (numbers of elements for each object). Mostly to be sure that everything was read
    pub fn print_stats(&self) {
        println!("GTFS data of {}:", self.root_path);
        println!("  Read in {} ms", self.read_duration);
        println!("  Agency: {}", self.agency);
        println!("  Calendars: {}", self.calendars.len());
        println!("  Routes: {}", self.routes.len());
        println!("  Stops: {}", self.stops.len());
        println!("  Stop times: {}", self.stop_times.len());
        println!("  Transfers: {}", self.transfers.len());
        println!("  Trips: {}", self.trips.len());
    }

    /// Gets a [Stop] by its `stop_id`
    pub fn get_stop(&self, id: &str) -> Option<&Stop> {
        find_by_id(&self.stops, id)
    }

    /// Gets a [Route] by its `route_id`
    pub fn get_route(&self, id: &str) -> Option<&Route> {
        find_by_id(&self.routes, id)
    }

    /// Gets a [Trip] by its `trip_id`
    pub fn get_trip(&self, id: &str) -> Option<&Trip> {
        find_by_id(&self.trips, id)
    }

    /// Replaces every enumeration code outside the GTFS reference by the default value
    pub(crate) fn unknown_to_default(&mut self) {
        for route in self.routes.iter_mut() {
            route.route_type = route.route_type.or_default();
            route.continuous_pickup = route.continuous_pickup.or_default();
            route.continuous_drop_off = route.continuous_drop_off.or_default();
        }
        for stop in self.stops.iter_mut() {
            stop.location_type = stop.location_type.or_default();
            stop.wheelchair_boarding = stop.wheelchair_boarding.or_default();
        }
        for stop_time in self.stop_times.iter_mut() {
            stop_time.pickup_type = stop_time.pickup_type.or_default();
            stop_time.drop_off_type = stop_time.drop_off_type.or_default();
            stop_time.continuous_pickup = stop_time.continuous_pickup.or_default();
            stop_time.continuous_drop_off = stop_time.continuous_drop_off.or_default();
            stop_time.timepoint = stop_time.timepoint.or_default();
        }
        for transfer in self.transfers.iter_mut() {
            transfer.transfer_type = transfer.transfer_type.or_default();
        }
        for trip in self.trips.iter_mut() {
            trip.direction_id = trip.direction_id.map(GtfsCode::or_default);
            trip.wheelchair_accessible = trip.wheelchair_accessible.or_default();
            trip.bikes_allowed = trip.bikes_allowed.or_default();
        }
    }
}

fn find_by_id<'a, T: Id>(objs: &'a [T], id: &str) -> Option<&'a T> {
    objs.iter().find(|o| o.id() == id)
}
