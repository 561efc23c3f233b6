use crate::builder;
use crate::error::{Error, Result};
use crate::tag::{SegmentInfo, Tag, TagType};
use crate::values::PlaylistType;
use serde::Serialize;
use std::str::FromStr;

/// A playlist listing the media segments of one rendition.
///
/// Each `EXTINF` tag owns the URI from the line that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaPlaylist {
    tags: Vec<Tag>,
}

fn expects_uri(tag_type: TagType) -> bool {
    matches!(tag_type, TagType::Inf | TagType::StreamInf)
}

impl MediaPlaylist {
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

    pub fn segments(&self) -> impl Iterator<Item = &SegmentInfo> {
        self.tags.iter().filter_map(Tag::as_segment_info)
    }

    fn find(&self, tag_type: TagType) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.tag_type() == tag_type)
    }

    pub fn version(&self) -> Option<u64> {
        self.tags.iter().find_map(Tag::version)
    }

    pub fn target_duration(&self) -> Option<u64> {
        self.find(TagType::TargetDuration)?.integer()
    }

    pub fn media_sequence(&self) -> Option<u64> {
        self.find(TagType::MediaSequence)?.integer()
    }

    pub fn discontinuity_sequence(&self) -> Option<u64> {
        self.find(TagType::DiscontinuitySequence)?.integer()
    }

    pub fn playlist_type(&self) -> Option<PlaylistType> {
        self.find(TagType::PlaylistType)?.playlist_type()
    }

    pub fn is_ended(&self) -> bool {
        self.find(TagType::EndList).is_some()
    }

    pub fn is_iframes_only(&self) -> bool {
        self.find(TagType::IFramesOnly).is_some()
    }

    /// Sum of the segment durations that could be decoded.
    pub fn total_duration(&self) -> f64 {
        self.segments().filter_map(SegmentInfo::duration).sum()
    }
}

impl FromStr for MediaPlaylist {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
