use crate::tag::{SegmentInfo, StreamInfo};
use url::{ParseError, Url};

/// Resolves a playlist URI line against the URL the playlist came from.
/// Absolute URIs are returned as they are.
pub fn resolve(base: &Url, uri: &str) -> Result<Url, ParseError> {
    match Url::parse(uri) {
        Err(ParseError::RelativeUrlWithoutBase) => base.join(uri),
        result => result,
    }
}

fn resolve_logged(base: &Url, uri: Option<&str>) -> Option<Url> {
    let uri = uri?;
    resolve(base, uri)
        .map_err(|e| log::debug!("cannot resolve {:?} against {}: {}", uri, base, e))
        .ok()
}

impl StreamInfo {
    pub fn resolved_uri(&self, base: &Url) -> Option<Url> {
        resolve_logged(base, self.uri())
    }
}

impl SegmentInfo {
    pub fn resolved_uri(&self, base: &Url) -> Option<Url> {
        resolve_logged(base, self.uri())
    }
}
