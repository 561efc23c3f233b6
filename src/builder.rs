use crate::error::{Error, Result};
use crate::lines::lines;
use crate::tag::{Tag, TagType};
use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{opt, rest},
    sequence::{pair, preceded},
    IResult,
};

pub(crate) const HEADER: &str = "#EXTM3U";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Tag { name: &'a str, value: Option<&'a str> },
    Uri(&'a str),
}

// `#NAME[:VALUE]`, split on the first colon only.
fn tag_line(i: &str) -> IResult<&str, (&str, Option<&str>)> {
    preceded(
        char('#'),
        pair(take_till(|c| c == ':'), opt(preceded(char(':'), rest))),
    )(i)
}

pub(crate) fn parse_line(line: &str) -> Line<'_> {
    match tag_line(line) {
        Ok((_, (name, value))) => Line::Tag { name, value },
        Err(_) => Line::Uri(line),
    }
}

/// Collects tags in source order. A tag that expects a URI line is held
/// back until that line arrives or another tag shows up.
struct TagListBuilder {
    tags: Vec<Tag>,
    pending: Option<Tag>,
    expects_uri: fn(TagType) -> bool,
}

impl TagListBuilder {
    fn new(expects_uri: fn(TagType) -> bool) -> Self {
        Self {
            tags: Vec::new(),
            pending: None,
            expects_uri,
        }
    }

    fn push_tag(&mut self, tag: Tag) {
        self.flush();

        if (self.expects_uri)(tag.tag_type()) {
            self.pending = Some(tag);
        } else {
            self.tags.push(tag);
        }
    }

    fn push_uri(&mut self, uri: &str) {
        match self.pending.take() {
            Some(mut tag) => {
                tag.set_uri(uri);
                self.tags.push(tag);
            }
            None => log::debug!("ignoring uri with no preceding tag: {}", uri),
        }
    }

    fn flush(&mut self) {
        if let Some(tag) = self.pending.take() {
            self.tags.push(tag);
        }
    }

    fn finish(mut self) -> Vec<Tag> {
        self.flush();
        self.tags
    }
}

/// Checks the `#EXTM3U` header, then builds every recognized tag.
pub(crate) fn parse_tags(input: &str, expects_uri: fn(TagType) -> bool) -> Result<Vec<Tag>> {
    let mut lines = lines(input);

    match lines.next() {
        Some(HEADER) => {}
        _ => return Err(Error::InvalidFormat),
    }

    let mut builder = TagListBuilder::new(expects_uri);

    for line in lines {
        match parse_line(line) {
            Line::Tag { name, value } => {
                if let Some(tag) = Tag::parse(name, value) {
                    builder.push_tag(tag);
                }
            }
            Line::Uri(uri) => builder.push_uri(uri),
        }
    }

    Ok(builder.finish())
}
