use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Master if any EXT-X-STREAM-INF tag is present, media otherwise
    Auto,
    Master,
    Media,
}

#[derive(Debug, Parser)]
#[clap(version, about = "Parse an HLS playlist and print its tags")]
pub struct Args {
    /// Playlist file to read
    pub path: PathBuf,

    #[clap(long, short, value_enum, default_value_t = Kind::Auto)]
    pub kind: Kind,

    /// URL the playlist was fetched from; relative URIs are resolved against it
    #[clap(long, short)]
    pub base_url: Option<Url>,

    /// Print the parsed playlist as JSON
    #[clap(long, short)]
    pub json: bool,
}
