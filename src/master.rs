use crate::builder;
use crate::error::{Error, Result};
use crate::tag::{StreamInfo, Tag, TagType};
use serde::Serialize;
use std::str::FromStr;

/// A playlist listing the variant streams of a presentation.
///
/// Each `EXT-X-STREAM-INF` tag owns the URI from the line that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterPlaylist {
    tags: Vec<Tag>,
}

fn expects_uri(tag_type: TagType) -> bool {
    tag_type == TagType::StreamInf
}

impl MasterPlaylist {
    pub fn parse(input: &str) -> Result<Self> {
        let tags = builder::parse_tags(input, expects_uri)?;
        Ok(Self { tags })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    pub fn stream_infos(&self) -> impl Iterator<Item = &StreamInfo> {
        self.tags.iter().filter_map(Tag::as_stream_info)
    }

    /// Variant URIs in source order.
    pub fn urls(&self) -> Vec<&str> {
        self.stream_infos().filter_map(StreamInfo::uri).collect()
    }

    pub fn version(&self) -> Option<u64> {
        self.tags.iter().find_map(Tag::version)
    }
}

impl FromStr for MasterPlaylist {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::values::Resolution;

    const MASTER: &str = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=1280000,RESOLUTION=640x360
low/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2560000,RESOLUTION=1280x720
high/index.m3u8
";

    #[test]
    fn pairs_variants_with_uris() {
        let playlist = MasterPlaylist::parse(MASTER).unwrap();
        let infos: Vec<_> = playlist.stream_infos().collect();

        assert_eq!(2, infos.len());
        assert_eq!(Some(1280000), infos[0].bandwidth());
        assert_eq!(
            Some(Resolution {
                width: 640,
                height: 360
            }),
            infos[0].resolution()
        );
        assert_eq!(Some("low/index.m3u8"), infos[0].uri());
        assert_eq!(Some(2560000), infos[1].bandwidth());
        assert_eq!(
            Some(Resolution {
                width: 1280,
                height: 720
            }),
            infos[1].resolution()
        );
        assert_eq!(Some("high/index.m3u8"), infos[1].uri());
        assert_eq!(vec!["low/index.m3u8", "high/index.m3u8"], playlist.urls());
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(Err(Error::InvalidFormat), MasterPlaylist::parse(""));
        assert_eq!(
            Err(Error::InvalidFormat),
            MasterPlaylist::parse("no-header-line\n#EXT-X-VERSION:3\n")
        );
    }

    #[test]
    fn empty_playlist() {
        let playlist: MasterPlaylist = "#EXTM3U\n".parse().unwrap();
        assert!(playlist.tags().is_empty());
        assert!(playlist.urls().is_empty());
    }

    #[test]
    fn ignores_stray_uri() {
        let input = "#EXTM3U\n#EXT-X-VERSION:3\nstray.m3u8\n";
        let playlist = MasterPlaylist::parse(input).unwrap();
        assert_eq!(vec![Tag::Version(3)], playlist.into_tags());
    }

    #[test]
    fn second_uri_line_is_ignored() {
        let input = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=1\na.m3u8\nb.m3u8\n";
        let playlist = MasterPlaylist::parse(input).unwrap();
        assert_eq!(vec!["a.m3u8"], playlist.urls());
    }

    #[test]
    fn version() {
        let playlist = MasterPlaylist::parse("#EXTM3U\n#EXT-X-VERSION:6\n").unwrap();
        assert_eq!(Some(6), playlist.version());
    }
}
