use crate::master::MasterPlaylist;
use crate::tag::StreamInfo;
use crate::values::Resolution;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A bandwidth/resolution option for adaptive playback.
///
/// Hashes by bandwidth only; equality also compares the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoQuality {
    pub bandwidth: u64,
    pub resolution: Option<Resolution>,
}

impl VideoQuality {
    pub fn new(bandwidth: u64, resolution: Option<Resolution>) -> Self {
        Self {
            bandwidth,
            resolution,
        }
    }

    /// `None` when the stream has no parseable `BANDWIDTH`.
    pub fn from_stream_info(info: &StreamInfo) -> Option<Self> {
        Some(Self::new(info.bandwidth()?, info.resolution()))
    }
}

impl Hash for VideoQuality {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bandwidth.hash(state);
    }
}

impl Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resolution {
            Some(resolution) => write!(f, "{} bps ({})", self.bandwidth, resolution),
            None => write!(f, "{} bps", self.bandwidth),
        }
    }
}

impl MasterPlaylist {
    /// Distinct variant qualities, highest bandwidth first. Variants sharing
    /// a bandwidth keep their source order.
    pub fn qualities(&self) -> Vec<VideoQuality> {
        let mut seen = HashSet::new();
        let mut qualities: Vec<_> = self
            .stream_infos()
            .filter_map(VideoQuality::from_stream_info)
            .filter(|quality| seen.insert(*quality))
            .collect();
        qualities.sort_by(|a, b| b.bandwidth.cmp(&a.bandwidth));
        qualities
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders_by_descending_bandwidth() {
        let input = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=1280000,RESOLUTION=640x360
low.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2560000,RESOLUTION=1280x720
high.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2560000,RESOLUTION=1280x720
high-backup.m3u8
#EXT-X-STREAM-INF:RESOLUTION=320x180
nobandwidth.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=64000,RESOLUTION=audio
audio.m3u8
";
        let qualities = MasterPlaylist::parse(input).unwrap().qualities();
        let bandwidths: Vec<_> = qualities.iter().map(|q| q.bandwidth).collect();
        assert_eq!(vec![2560000, 1280000, 64000], bandwidths);
        assert_eq!(
            Some(Resolution {
                width: 1280,
                height: 720
            }),
            qualities[0].resolution
        );
        assert_eq!(None, qualities[2].resolution);
    }

    #[test]
    fn equality_compares_resolution() {
        let a = VideoQuality::new(
            1,
            Some(Resolution {
                width: 1,
                height: 1,
            }),
        );
        assert_ne!(a, VideoQuality::new(1, None));
        assert_eq!(a, a);
    }

    #[test]
    fn keeps_same_bandwidth_with_different_resolutions() {
        let input = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=1000,RESOLUTION=640x360
sd.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=1000,RESOLUTION=1280x720
hd.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=1000,RESOLUTION=640x360
sd-backup.m3u8
";
        let qualities = MasterPlaylist::parse(input).unwrap().qualities();
        let resolutions: Vec<_> = qualities.iter().map(|q| q.resolution).collect();
        assert_eq!(
            vec![
                Some(Resolution {
                    width: 640,
                    height: 360
                }),
                Some(Resolution {
                    width: 1280,
                    height: 720
                }),
            ],
            resolutions
        );
    }

    #[test]
    fn display() {
        let q = VideoQuality::new(
            1280000,
            Some(Resolution {
                width: 640,
                height: 360,
            }),
        );
        assert_eq!("1280000 bps (640x360)", q.to_string());
        assert_eq!("64000 bps", VideoQuality::new(64000, None).to_string());
    }
}
