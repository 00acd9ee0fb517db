/*! Records of the [GTFS](https://gtfs.org/) files and the reader that decodes them.

Each file of a feed holds one kind of record, one per row: [Stop] for `stops.txt`,
[Trip] for `trips.txt`… [RecordReader] turns a file into a `Vec` of any of them.

Records are flat. A [Trip] names its route by `route_id` and nothing checks the route exists.

Integer codes are decoded into enums implementing [GtfsCode]. A code outside the reference
is kept as `Unknown` rather than failing the whole file.

```no_run
use gtfs_records::{RecordReader, Trip};

let trips: Vec<Trip> = RecordReader::default().read_path("fixtures/basic/trips.txt")?;
for trip in &trips {
    println!("{}", trip);
}
# Ok::<(), gtfs_records::Error>(())
```
*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate serde_derive;

mod enums;
pub mod error;
mod fields;
mod objects;
mod record_reader;

#[cfg(test)]
mod tests;

pub use error::{Error, RawRow};
pub use objects::*;
pub use record_reader::RecordReader;
