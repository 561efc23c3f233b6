use crate::builder::{self, Line};
use crate::error::Result;
use crate::lines::lines;
use crate::master::MasterPlaylist;
use crate::media::MediaPlaylist;
use crate::tag::{Tag, TagType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Playlist {
    Master(MasterPlaylist),
    Media(MediaPlaylist),
}

/// True when any tag line is an `EXT-X-STREAM-INF`.
pub fn is_master_playlist(input: &str) -> bool {
    lines(input).any(|line| {
        matches!(
            builder::parse_line(line),
            Line::Tag { name, .. } if name == TagType::StreamInf.name()
        )
    })
}

impl Playlist {
    /// Parses `input` as a master playlist if it lists variant streams,
    /// otherwise as a media playlist.
    pub fn parse(input: &str) -> Result<Self> {
        if is_master_playlist(input) {
            MasterPlaylist::parse(input).map(Self::Master)
        } else {
            MediaPlaylist::parse(input).map(Self::Media)
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Master(playlist) => playlist.tags(),
            Self::Media(playlist) => playlist.tags(),
        }
    }
}
