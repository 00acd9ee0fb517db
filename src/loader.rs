use chrono::Utc;
use gtfs_records::RecordReader;
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::{Error, Feed};
use std::io::ErrorKind;
use std::path::Path;

/// The files of a feed directory that are loaded, all of them optional
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FeedFile {
    /// `agency.txt`, only its first row is kept
    Agency,
    /// `calendar.txt`
    Calendar,
    /// `routes.txt`
    Routes,
    /// `stops.txt`
    Stops,
    /// `stop_times.txt`
    StopTimes,
    /// `transfers.txt`
    Transfers,
    /// `trips.txt`
    Trips,
}

impl FeedFile {
    /// Every known file, in the order they are loaded
    pub const ALL: [FeedFile; 7] = [
        FeedFile::Agency,
        FeedFile::Calendar,
        FeedFile::Routes,
        FeedFile::Stops,
        FeedFile::StopTimes,
        FeedFile::Transfers,
        FeedFile::Trips,
    ];

    /// Name of the file inside the feed directory
    pub fn file_name(self) -> &'static str {
        match self {
            FeedFile::Agency => "agency.txt",
            FeedFile::Calendar => "calendar.txt",
            FeedFile::Routes => "routes.txt",
            FeedFile::Stops => "stops.txt",
            FeedFile::StopTimes => "stop_times.txt",
            FeedFile::Transfers => "transfers.txt",
            FeedFile::Trips => "trips.txt",
        }
    }
}

/// Allows to parameterize how the feeds are loaded
///
/// The default loader reads every known file, trims the fields and keeps the unknown enumeration values
///
/// ```no_run
///let feeds = gtfs_loader::FeedLoader::default()
///    .read_stop_times(false)
///    .unknown_enum_as_default(true)
///    .load_split("fixtures/split")?;
///assert!(feeds.iter().all(|feed| feed.stop_times.is_empty()));
/// # Ok::<(), gtfs_loader::Error>(())
///```
#[derive(Derivative, Debug, Clone, Copy)]
#[derivative(Default)]
pub struct FeedLoader {
    /// Read `stop_times.txt`, usually the largest file of a feed
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// Replace the enumeration codes outside the GTFS reference by the default value of the enumeration
    #[derivative(Default(value = "false"))]
    pub unknown_enum_as_default: bool,
    /// Trim the whitespaces around the headers and fields, see [RecordReader::trim_fields]
    #[derivative(Default(value = "true"))]
    pub trim_fields: bool,
}

impl FeedLoader {
    /// Configures the loader to read `stop_times.txt` or to skip it as if it was absent (default: true)
    ///
    /// Returns Self and can be chained
    pub fn read_stop_times(mut self, read_stop_times: bool) -> Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Configures the loader to replace the unknown enumeration codes by their default (default: false)
    ///
    /// Every enumeration of every record is concerned. For instance a [gtfs_records::Stop]
    /// with a `location_type` of 42 gets [gtfs_records::LocationType::StopPoint] when true,
    /// and keeps `LocationType::Unknown(42)` when false
    /// Returns Self and can be chained
    pub fn unknown_enum_as_default(mut self, unknown_enum_as_default: bool) -> Self {
        self.unknown_enum_as_default = unknown_enum_as_default;
        self
    }

    /// Configures the loader to trim the fields (default: true)
    ///
    /// Returns Self and can be chained
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Loads the feed rooted at the directory `path`
    ///
    /// Fails with [Error::NotFound] if nothing exists at `path`.
    /// Only the absence is checked: a path to a regular file passes, the load then fails on its first known file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Feed, Error> {
        let path = path.as_ref();
        let root_path = path.display().to_string();
        if let Err(e) = std::fs::metadata(path) {
            if e.kind() == ErrorKind::NotFound {
                return Err(Error::NotFound(root_path));
            }
        }
        self.assemble(root_path)
    }

    /// Loads every feed of a split GTFS: each immediate subdirectory of `path` is an independent feed
    ///
    /// The feeds are returned in the order of their directory names, entries that are not directories are ignored.
    /// Loading stops at the first feed that fails, and no feed is returned.
    pub fn load_split<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Feed>, Error> {
        let path = path.as_ref();
        let listing_error = |source: std::io::Error| Error::Listing {
            path: path.display().to_string(),
            source,
        };
        let now = Utc::now();
        info!("Loading split GTFS {}", path.display());

        let mut entries = std::fs::read_dir(path)
            .map_err(listing_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(listing_error)?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut feeds = Vec::new();
        for entry in entries {
            let sub_dir = path.join(entry.file_name());
            if !entry.file_type().map_err(listing_error)?.is_dir() {
                debug!("{} is not a directory, skipped", sub_dir.display());
                continue;
            }
            feeds.push(self.assemble(sub_dir.display().to_string())?);
        }

        info!(
            "{} feeds of {} loaded in {} ms",
            feeds.len(),
            path.display(),
            Utc::now().signed_duration_since(now).num_milliseconds()
        );
        Ok(feeds)
    }

    /// Builds the feed rooted at `root_path`, wrapping any failure with that path
    fn assemble(&self, root_path: String) -> Result<Feed, Error> {
        let mut feed = Feed::new(root_path);
        match self.populate(&mut feed) {
            Ok(()) => Ok(feed),
            Err(e) => Err(Error::Feed {
                path: feed.root_path,
                source: Box::new(e),
            }),
        }
    }

    fn populate(&self, feed: &mut Feed) -> Result<(), Error> {
        let now = Utc::now();
        info!("Loading GTFS {}", feed.root_path);
        let root = Path::new(&feed.root_path).to_path_buf();

        let mut agencies = Vec::new();
        for file in FeedFile::ALL {
            match file {
                FeedFile::Agency => agencies = self.read_file(&root, file)?,
                FeedFile::Calendar => feed.calendars = self.read_file(&root, file)?,
                FeedFile::Routes => feed.routes = self.read_file(&root, file)?,
                FeedFile::Stops => feed.stops = self.read_file(&root, file)?,
                FeedFile::StopTimes if !self.read_stop_times => {
                    debug!("{} skipped, stop times are not read", file.file_name())
                }
                FeedFile::StopTimes => feed.stop_times = self.read_file(&root, file)?,
                FeedFile::Transfers => feed.transfers = self.read_file(&root, file)?,
                FeedFile::Trips => feed.trips = self.read_file(&root, file)?,
            }
        }
        if let Some(agency) = agencies.into_iter().next() {
            feed.agency = agency;
        }

        if self.unknown_enum_as_default {
            feed.unknown_to_default();
        }
        feed.read_duration = Utc::now().signed_duration_since(now).num_milliseconds();
        info!("GTFS {} loaded in {} ms", feed.root_path, feed.read_duration);
        Ok(())
    }

    /// Reads all the records of `file`, no record if the file is absent
    fn read_file<O>(&self, root: &Path, file: FeedFile) -> Result<Vec<O>, Error>
    where
        O: DeserializeOwned,
    {
        let file_path = root.join(file.file_name());
        if let Err(e) = std::fs::metadata(&file_path) {
            if e.kind() == ErrorKind::NotFound {
                debug!("{} not found, skipped", file_path.display());
                return Ok(Vec::new());
            }
        }
        RecordReader::default()
            .trim_fields(self.trim_fields)
            .read_path(&file_path)
            .map_err(|source| Error::File {
                file_name: file.file_name().to_owned(),
                source,
            })
    }
}
