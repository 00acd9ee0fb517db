/*! Loads [GTFS](https://gtfs.org/) feeds stored as directories into typed records.

A feed directory holds some of the well-known GTFS files (`agency.txt`, `stops.txt`…).
Every file is optional: the ones that are present are decoded, one record per row, the others give empty collections.

Two layouts are supported:
 * a single feed directory, see [load_feed]
 * a split feed, a directory whose subdirectories are independent feeds, see [load_split_feeds]

```no_run
let feed = gtfs_loader::load_feed("fixtures/basic")?;
feed.print_stats();

for feed in gtfs_loader::load_split_feeds("fixtures/split")? {
    println!("{}: {} stops", feed.root_path, feed.stops.len());
}
# Ok::<(), gtfs_loader::Error>(())
```

No relationship between the records is checked: a [gtfs_records::StopTime] referencing an unknown stop is kept as is.
The library logs through the [log] facade and never installs a logger.
*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;

pub mod error;
mod feed;
mod loader;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use feed::Feed;
pub use gtfs_records;
pub use loader::{FeedFile, FeedLoader};

use std::path::Path;

/// Loads the feed rooted at the directory `path` with the default [FeedLoader]
pub fn load_feed<P: AsRef<Path>>(path: P) -> Result<Feed, Error> {
    FeedLoader::default().load(path)
}

/// Loads every subdirectory of `path` as an independent feed with the default [FeedLoader]
///
/// Fails as soon as one of them can not be loaded
pub fn load_split_feeds<P: AsRef<Path>>(path: P) -> Result<Vec<Feed>, Error> {
    FeedLoader::default().load_split(path)
}
