mod attributes;
mod builder;
mod error;
mod lines;
mod master;
mod media;
mod playlist;
mod quality;
mod tag;
mod uri;
mod values;

pub use attributes::{Attribute, Attributes};
pub use error::{Error, Result};
pub use lines::{lines, Lines};
pub use master::MasterPlaylist;
pub use media::MediaPlaylist;
pub use playlist::{is_master_playlist, Playlist};
pub use quality::VideoQuality;
pub use tag::{SegmentInfo, Shape, StreamInfo, Tag, TagType};
pub use uri::resolve;
pub use values::{ByteRange, PlaylistType, Resolution};
