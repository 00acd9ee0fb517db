use crate::objects::*;
use crate::{Error, RecordReader};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rgb::RGB8;

fn read<O: serde::de::DeserializeOwned>(content: &str, file_name: &str) -> Result<Vec<O>, Error> {
    RecordReader::default().read(content.as_bytes(), file_name)
}

#[test]
fn read_agencies() {
    let agencies: Vec<Agency> = read(
        "agency_id,agency_name,agency_url,agency_timezone,agency_lang\n\
         BIBUS,BIBUS,http://www.bibus.fr,Europe/Paris,fr\n",
        "agency.txt",
    )
    .expect("impossible to read agencies");
    assert_eq!(1, agencies.len());
    assert_eq!("BIBUS", agencies[0].id());
    assert_eq!("http://www.bibus.fr", agencies[0].url);
    assert_eq!("Europe/Paris", agencies[0].timezone);
    assert_eq!(Some("fr".to_owned()), agencies[0].lang);
    assert_eq!(None, agencies[0].phone);
}

#[test]
fn read_calendar() {
    let calendars: Vec<Calendar> = read(
        "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
         service1,0,0,0,0,0,1,1,20170101,20170115\n",
        "calendar.txt",
    )
    .expect("impossible to read calendar");
    let calendar = &calendars[0];
    assert_eq!("service1", calendar.id());
    assert!(!calendar.monday);
    assert!(calendar.saturday);
    assert_eq!(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), calendar.start_date);
    // 2017-01-07 is a saturday, 2017-01-09 a monday
    assert!(calendar.runs_on(NaiveDate::from_ymd_opt(2017, 1, 7).unwrap()));
    assert!(!calendar.runs_on(NaiveDate::from_ymd_opt(2017, 1, 9).unwrap()));
    assert!(calendar.valid_weekday(NaiveDate::from_ymd_opt(2018, 1, 6).unwrap()));
    assert!(!calendar.runs_on(NaiveDate::from_ymd_opt(2018, 1, 6).unwrap()));
}

#[test]
fn read_invalid_calendar_bool() {
    let err = read::<Calendar>(
        "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
         service1,yes,0,0,0,0,1,1,20170101,20170115\n",
        "calendar.txt",
    )
    .unwrap_err();
    match &err {
        Error::Csv {
            file_name,
            row: Some(row),
            ..
        } => {
            assert_eq!("calendar.txt", file_name);
            assert_eq!("yes", row.values[1]);
            assert_eq!("monday", row.headers[1]);
        }
        e => panic!("unexpected error {:?}", e),
    }
    assert_eq!(Some(2), err.line());
}

#[test]
fn read_routes() {
    let routes: Vec<Route> = read(
        "route_id,agency_id,route_short_name,route_long_name,route_type,route_color,route_text_color,route_sort_order\n\
         1,BIBUS,1,Route 1,3,000000,FFFFFF,1\n\
         default_colors,BIBUS,2,,3,,,\n\
         invalid_type,BIBUS,3,Route 3,42,,,\n\
         extended,BIBUS,4,Route 4,1100,,,\n",
        "routes.txt",
    )
    .expect("impossible to read routes");
    assert_eq!(4, routes.len());
    assert_eq!(RouteType::Bus, routes[0].route_type);
    assert_eq!(RGB8::new(0, 0, 0), routes[0].color);
    assert_eq!(RGB8::new(255, 255, 255), routes[0].text_color);
    assert_eq!(Some(1), routes[0].order);
    assert_eq!("Route 1", routes[0].to_string());
    assert_eq!(RGB8::new(255, 255, 255), routes[1].color);
    assert_eq!(RGB8::new(0, 0, 0), routes[1].text_color);
    assert_eq!("2", routes[1].to_string());
    assert_eq!(RouteType::Other(42), routes[2].route_type);
    assert_eq!(RouteType::Air, routes[3].route_type);
}

#[test]
fn read_stops() {
    let stops: Vec<Stop> = read(
        "stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station,wheelchair_boarding\n\
         stop1,Gare,48.796058,2.449386,1,,\n\
         stop2,Quai 1,48.796058,2.449386,0,stop1,1\n\
         stop3,Noeud,,,3,stop1,\n\
         stop4,Inconnu,,,42,,7\n",
        "stops.txt",
    )
    .expect("impossible to read stops");
    assert_eq!(4, stops.len());
    assert_eq!(LocationType::StopArea, stops[0].location_type);
    assert_eq!(None, stops[0].parent_station);
    assert_eq!(LocationType::StopPoint, stops[1].location_type);
    assert_eq!(Some(48.796_058), stops[1].latitude);
    assert_eq!(Some("stop1".to_owned()), stops[1].parent_station);
    assert_eq!(Availability::Available, stops[1].wheelchair_boarding);
    assert_eq!(LocationType::GenericNode, stops[2].location_type);
    assert_eq!(None, stops[2].latitude);
    assert_eq!(LocationType::Unknown(42), stops[3].location_type);
    assert_eq!(Availability::Unknown(7), stops[3].wheelchair_boarding);
}

#[test]
fn read_stop_times() {
    let stop_times: Vec<StopTime> = read(
        "trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type,drop_off_type,timepoint\n\
         trip1,14:00:00,14:00:00,stop2,1,0,1,1\n\
         trip1,,,stop3,2,2,0,0\n\
         trip1,25:10:00,25:10:00,stop5,3,,-999,\n",
        "stop_times.txt",
    )
    .expect("impossible to read stop times");
    assert_eq!(3, stop_times.len());
    assert_eq!(Some(14 * 3600), stop_times[0].arrival_time);
    assert_eq!(PickupDropOffType::Regular, stop_times[0].pickup_type);
    assert_eq!(PickupDropOffType::NotAvailable, stop_times[0].drop_off_type);
    assert_eq!(TimepointType::Exact, stop_times[0].timepoint);
    assert_eq!(None, stop_times[1].departure_time);
    assert_eq!(PickupDropOffType::ArrangeByPhone, stop_times[1].pickup_type);
    assert_eq!(TimepointType::Approximate, stop_times[1].timepoint);
    assert_eq!(Some(25 * 3600 + 600), stop_times[2].departure_time);
    assert_eq!(PickupDropOffType::Unknown(-999), stop_times[2].drop_off_type);
    assert_eq!(TimepointType::Exact, stop_times[2].timepoint);
}

#[test]
fn read_invalid_time() {
    let err = read::<StopTime>(
        "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
         trip1,14h00,14:00:00,stop2,1\n",
        "stop_times.txt",
    )
    .unwrap_err();
    assert!(matches!(err, Error::Csv { row: Some(_), .. }));
    assert_eq!("cannot decode 'stop_times.txt'", err.to_string());
    assert_eq!("stop_times.txt", err.file_name());
    let cause = std::error::Error::source(&err).map(|e| e.to_string());
    assert!(cause.unwrap_or_default().contains("'14h00' is not a HH:MM:SS time"));
}

#[test]
fn read_transfers() {
    let transfers: Vec<Transfer> = read(
        "from_stop_id,to_stop_id,transfer_type,min_transfer_time\n\
         stop1,stop2,2,120\n\
         stop2,stop1,,\n",
        "transfers.txt",
    )
    .expect("impossible to read transfers");
    assert_eq!(
        vec![
            Transfer {
                from_stop_id: "stop1".to_owned(),
                to_stop_id: "stop2".to_owned(),
                transfer_type: TransferType::MinTime,
                min_transfer_time: Some(120),
            },
            Transfer {
                from_stop_id: "stop2".to_owned(),
                to_stop_id: "stop1".to_owned(),
                transfer_type: TransferType::Recommended,
                min_transfer_time: None,
            },
        ],
        transfers
    );
}

#[test]
fn read_trips() {
    let trips: Vec<Trip> = read(
        "route_id,service_id,trip_id,direction_id,wheelchair_accessible,bikes_allowed\n\
         1,service1,trip1,1,,2\n\
         1,service1,trip2,,1,\n",
        "trips.txt",
    )
    .expect("impossible to read trips");
    assert_eq!(2, trips.len());
    assert_eq!("trip1", trips[0].id());
    assert_eq!(Some(DirectionType::Inbound), trips[0].direction_id);
    assert_eq!(BikesAllowedType::NoBikesAllowed, trips[0].bikes_allowed);
    assert_eq!(None, trips[1].direction_id);
    assert_eq!(Availability::Available, trips[1].wheelchair_accessible);
}

#[test]
fn unknown_columns_are_ignored() {
    let stops: Vec<Stop> = read(
        "stop_id,stop_name,vehicle_type,stop_lat,stop_lon\n\
         stop1,Gare,700,48.1,-1.2\n",
        "stops.txt",
    )
    .expect("impossible to read stops");
    assert_eq!("Gare", stops[0].name);
    assert_eq!(Some(-1.2), stops[0].longitude);
}

#[test]
fn read_with_bom_and_spaces() {
    let content = "\u{feff}stop_id, stop_name\nstop1 , Gare \n";
    let stops: Vec<Stop> = read(content, "stops.txt").expect("impossible to read stops");
    assert_eq!("stop1", stops[0].id);
    assert_eq!("Gare", stops[0].name);

    let untrimmed: Vec<Stop> = RecordReader::default()
        .trim_fields(false)
        .read("stop_id,stop_name\nstop1, Gare\n".as_bytes(), "stops.txt")
        .expect("impossible to read stops");
    assert_eq!(" Gare", untrimmed[0].name);
}

#[test]
fn empty_input_gives_no_record() {
    let agencies: Vec<Agency> = read("", "agency.txt").expect("empty file");
    assert!(agencies.is_empty());
    let agencies: Vec<Agency> =
        read("agency_name,agency_url,agency_timezone\n", "agency.txt").expect("header only");
    assert!(agencies.is_empty());
}

#[test]
fn read_missing_path() {
    let err = RecordReader::default()
        .read_path::<Stop, _>("fixtures/does_not_exist/stops.txt")
        .unwrap_err();
    match err {
        Error::Io { file_name, source } => {
            assert_eq!("stops.txt", file_name);
            assert_eq!(std::io::ErrorKind::NotFound, source.kind());
        }
        e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn enum_codes() {
    assert_eq!(LocationType::StationEntrance, LocationType::from_code(2));
    assert_eq!(TransferType::Unknown(9), TransferType::from_code(9));
    assert_eq!(TransferType::Recommended, TransferType::from_code(9).or_default());
    assert_eq!(Availability::Available, Availability::Available.or_default());
    assert_eq!(RouteType::Subway, RouteType::from_code(1));
    assert_eq!(RouteType::Rail, RouteType::from_code(109));
    assert_eq!(RouteType::Bus, RouteType::from_code(800));
    assert_eq!(RouteType::Other(11), RouteType::from_code(11));
    assert_eq!(RouteType::Bus, RouteType::Other(11).or_default());
    assert!(TimepointType::Unknown(2).is_unknown());
}

#[test]
fn non_integer_codes_fail() {
    let err = read::<Route>(
        "route_id,route_short_name,route_type\nr1,1,bus\n",
        "routes.txt",
    )
    .unwrap_err();
    assert_eq!(Some(2), err.line());
    let cause = std::error::Error::source(&err).map(|e| e.to_string());
    assert!(cause.unwrap_or_default().contains("RouteType must be an integer, got 'bus'"));
}

#[test]
fn read_continuous_stopping() {
    let routes: Vec<Route> = read(
        "route_id,route_short_name,route_type,continuous_pickup,continuous_drop_off\n\
         r1,1,3,0,\n\
         r2,2,3,7,3\n",
        "routes.txt",
    )
    .expect("impossible to read routes");
    assert_eq!(ContinuousPickupDropOff::Continuous, routes[0].continuous_pickup);
    assert_eq!(ContinuousPickupDropOff::NotAvailable, routes[0].continuous_drop_off);
    assert_eq!(ContinuousPickupDropOff::Unknown(7), routes[1].continuous_pickup);
    assert_eq!(
        ContinuousPickupDropOff::CoordinateWithDriver,
        routes[1].continuous_drop_off
    );
}
