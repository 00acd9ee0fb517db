use anyhow::Context;
use gtfs_loader::FeedLoader;
use log::info;

/// Prints some stats about the GTFS directory given as a cli argument
///
/// With `--split`, every subdirectory of the given directory is read as its own feed
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let (split, path) = match args.next() {
        Some(flag) if flag == "--split" => (true, args.next()),
        other => (false, other),
    };
    let path = path.context("you should put the path of the directory to load")?;

    let loader = FeedLoader::default();
    let feeds = if split {
        loader.load_split(&path)
    } else {
        loader.load(&path).map(|feed| vec![feed])
    }?;

    info!("{} feeds read from {}", feeds.len(), path);
    for feed in &feeds {
        feed.print_stats();
    }
    Ok(())
}
