mod args;

use args::{Args, Kind};
use clap::Parser;
use hls_playlist::{MasterPlaylist, MediaPlaylist, Playlist};
use std::time::Instant;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let input = std::fs::read_to_string(&args.path)?;

    let start_time = Instant::now();
    let playlist = match args.kind {
        Kind::Auto => Playlist::parse(&input)?,
        Kind::Master => Playlist::Master(MasterPlaylist::parse(&input)?),
        Kind::Media => Playlist::Media(MediaPlaylist::parse(&input)?),
    };
    log::info!("Parsed playlist in {:?}", start_time.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&playlist)?);
        return Ok(());
    }

    for tag in playlist.tags() {
        println!("{}", tag);
    }

    match &playlist {
        Playlist::Master(master) => print_variants(master, args.base_url.as_ref()),
        Playlist::Media(media) => {
            if let Some(base) = &args.base_url {
                print_segments(media, base);
            }
        }
    }

    Ok(())
}

fn print_variants(playlist: &MasterPlaylist, base_url: Option<&Url>) {
    println!();
    for quality in playlist.qualities() {
        println!("{}", quality);
    }

    if let Some(base) = base_url {
        println!();
        for url in playlist
            .stream_infos()
            .filter_map(|info| info.resolved_uri(base))
        {
            println!("{}", url);
        }
    }
}

fn print_segments(playlist: &MediaPlaylist, base: &Url) {
    println!();
    for url in playlist
        .segments()
        .filter_map(|segment| segment.resolved_uri(base))
    {
        println!("{}", url);
    }
}
