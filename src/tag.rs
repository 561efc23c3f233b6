use crate::attributes::Attributes;
use crate::values::{self, ByteRange, PlaylistType, Resolution};
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// The value layout a tag type carries after its `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    None,
    Single,
    Attributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Discontinuity,
    EndList,
    IFramesOnly,

    Version,
    ByteRange,
    ProgramDateTime,
    TargetDuration,
    MediaSequence,
    DiscontinuitySequence,
    PlaylistType,

    Key,
    Map,
    Media,
    Start,
    StreamInf,
    SessionKey,
    Inf,
}

const TAG_TYPES: [TagType; 17] = [
    TagType::Discontinuity,
    TagType::EndList,
    TagType::IFramesOnly,
    TagType::Version,
    TagType::ByteRange,
    TagType::ProgramDateTime,
    TagType::TargetDuration,
    TagType::MediaSequence,
    TagType::DiscontinuitySequence,
    TagType::PlaylistType,
    TagType::Key,
    TagType::Map,
    TagType::Media,
    TagType::Start,
    TagType::StreamInf,
    TagType::SessionKey,
    TagType::Inf,
];

impl TagType {
    /// Looks up a tag name as written after the `#`. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        TAG_TYPES.iter().copied().find(|t| t.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Discontinuity => "EXT-X-DISCONTINUITY",
            Self::EndList => "EXT-X-ENDLIST",
            Self::IFramesOnly => "EXT-X-I-FRAMES-ONLY",
            Self::Version => "EXT-X-VERSION",
            Self::ByteRange => "EXT-X-BYTERANGE",
            Self::ProgramDateTime => "EXT-X-PROGRAM-DATE-TIME",
            Self::TargetDuration => "EXT-X-TARGETDURATION",
            Self::MediaSequence => "EXT-X-MEDIA-SEQUENCE",
            Self::DiscontinuitySequence => "EXT-X-DISCONTINUITY-SEQUENCE",
            Self::PlaylistType => "EXT-X-PLAYLIST-TYPE",
            Self::Key => "EXT-X-KEY",
            Self::Map => "EXT-X-MAP",
            Self::Media => "EXT-X-MEDIA",
            Self::Start => "EXT-X-START",
            Self::StreamInf => "EXT-X-STREAM-INF",
            Self::SessionKey => "EXT-X-SESSION-KEY",
            Self::Inf => "EXTINF",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::Discontinuity | Self::EndList | Self::IFramesOnly => Shape::None,
            Self::Version
            | Self::ByteRange
            | Self::ProgramDateTime
            | Self::TargetDuration
            | Self::MediaSequence
            | Self::DiscontinuitySequence
            | Self::PlaylistType => Shape::Single,
            Self::Key
            | Self::Map
            | Self::Media
            | Self::Start
            | Self::StreamInf
            | Self::SessionKey
            | Self::Inf => Shape::Attributes,
        }
    }
}

impl Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TagType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// `EXT-X-STREAM-INF`: one variant stream of a master playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamInfo {
    pub attributes: Attributes,
    pub uri: Option<String>,
}

impl StreamInfo {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            uri: None,
        }
    }

    pub fn bandwidth(&self) -> Option<u64> {
        self.attributes.get("BANDWIDTH")?.integer()
    }

    pub fn average_bandwidth(&self) -> Option<u64> {
        self.attributes.get("AVERAGE-BANDWIDTH")?.integer()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.attributes.get("RESOLUTION")?.resolution()
    }

    pub fn frame_rate(&self) -> Option<f64> {
        self.attributes.get("FRAME-RATE")?.float()
    }

    pub fn codecs(&self) -> Option<&str> {
        self.attributes.value("CODECS")
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// `EXTINF`: describes the media segment named by the following URI line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentInfo {
    pub raw_value: String,
    pub attributes: Attributes,
    pub uri: Option<String>,
}

impl SegmentInfo {
    pub fn new(raw_value: &str) -> Self {
        Self {
            raw_value: raw_value.to_string(),
            attributes: Attributes::parse(raw_value),
            uri: None,
        }
    }

    pub fn duration(&self) -> Option<f64> {
        values::parse_duration_title(&self.raw_value).map(|(duration, _)| duration)
    }

    pub fn title(&self) -> Option<&str> {
        values::parse_duration_title(&self.raw_value).and_then(|(_, title)| title)
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Tag {
    Marker(TagType),
    Version(u64),
    Single { tag_type: TagType, value: String },
    Attributes { tag_type: TagType, attributes: Attributes },
    StreamInf(StreamInfo),
    Inf(SegmentInfo),
}

impl Tag {
    /// Classifies `name` and builds the tag. Unknown names yield `None`.
    pub fn parse(name: &str, value: Option<&str>) -> Option<Self> {
        match TagType::from_name(name) {
            Some(tag_type) => Some(Self::new(tag_type, value)),
            None => {
                log::debug!("dropping unknown tag #{}", name);
                None
            }
        }
    }

    /// Builds the variant matching the shape of `tag_type`. A missing value
    /// is treated as empty; a value on a marker type is ignored.
    pub fn new(tag_type: TagType, value: Option<&str>) -> Self {
        let value = value.unwrap_or_default();

        match (tag_type.shape(), tag_type) {
            (Shape::None, _) => Self::Marker(tag_type),
            (Shape::Single, TagType::Version) => {
                Self::Version(values::parse_integer(value).unwrap_or_else(|| {
                    log::debug!("invalid #{} value {:?}, using 0", tag_type, value);
                    0
                }))
            }
            (Shape::Single, _) => Self::Single {
                tag_type,
                value: value.to_string(),
            },
            (Shape::Attributes, TagType::StreamInf) => {
                Self::StreamInf(StreamInfo::new(Attributes::parse(value)))
            }
            (Shape::Attributes, TagType::Inf) => Self::Inf(SegmentInfo::new(value)),
            (Shape::Attributes, _) => Self::Attributes {
                tag_type,
                attributes: Attributes::parse(value),
            },
        }
    }

    pub fn tag_type(&self) -> TagType {
        match self {
            Self::Marker(t) => *t,
            Self::Version(_) => TagType::Version,
            Self::Single { tag_type, .. } | Self::Attributes { tag_type, .. } => *tag_type,
            Self::StreamInf(_) => TagType::StreamInf,
            Self::Inf(_) => TagType::Inf,
        }
    }

    /// Raw text of a single-value tag other than `EXT-X-VERSION`.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Single { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Attributes { attributes, .. } => Some(attributes),
            Self::StreamInf(info) => Some(&info.attributes),
            Self::Inf(info) => Some(&info.attributes),
            _ => None,
        }
    }

    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::StreamInf(info) => info.uri(),
            Self::Inf(info) => info.uri(),
            _ => None,
        }
    }

    pub(crate) fn set_uri(&mut self, uri: &str) {
        match self {
            Self::StreamInf(info) => info.uri = Some(uri.to_string()),
            Self::Inf(info) => info.uri = Some(uri.to_string()),
            _ => {}
        }
    }

    pub fn as_stream_info(&self) -> Option<&StreamInfo> {
        match self {
            Self::StreamInf(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_segment_info(&self) -> Option<&SegmentInfo> {
        match self {
            Self::Inf(info) => Some(info),
            _ => None,
        }
    }

    pub fn version(&self) -> Option<u64> {
        match self {
            Self::Version(v) => Some(*v),
            _ => None,
        }
    }

    /// Target duration, media sequence or discontinuity sequence.
    pub fn integer(&self) -> Option<u64> {
        self.value().and_then(values::parse_integer)
    }

    pub fn byte_range(&self) -> Option<ByteRange> {
        match self {
            Self::Single {
                tag_type: TagType::ByteRange,
                value,
            } => values::parse_byte_range(value),
            _ => None,
        }
    }

    pub fn date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Single {
                tag_type: TagType::ProgramDateTime,
                value,
            } => values::parse_date_time(value),
            _ => None,
        }
    }

    pub fn playlist_type(&self) -> Option<PlaylistType> {
        match self {
            Self::Single {
                tag_type: TagType::PlaylistType,
                value,
            } => values::parse_playlist_type(value),
            _ => None,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marker(t) => write!(f, "#{}", t),
            Self::Version(v) => write!(f, "#{}:{}", TagType::Version, v),
            Self::Single { tag_type, value } => write!(f, "#{}:{}", tag_type, value),
            Self::Attributes {
                tag_type,
                attributes,
            } => write!(f, "#{}:{}", tag_type, attributes),
            Self::StreamInf(info) => write!(f, "#{}:{}", TagType::StreamInf, info.attributes),
            Self::Inf(info) => write!(f, "#{}:{}", TagType::Inf, info.raw_value),
        }?;

        match self.uri() {
            Some(uri) => write!(f, "\n{}", uri),
            None => Ok(()),
        }
    }
}
