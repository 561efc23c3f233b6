use chrono::{DateTime, FixedOffset};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, hex_digit1},
    combinator::{all_consuming, map, map_res, opt, recognize, rest, value},
    sequence::{pair, preceded, separated_pair, tuple},
    IResult,
};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u64,
    pub height: u64,
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// `EXT-X-BYTERANGE:<n>[@<o>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub length: u64,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PlaylistType {
    Event,
    Vod,
}

fn integer(i: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(i)
}

fn float(i: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((opt(char('-')), digit0, opt(pair(char('.'), digit0))))),
        |s: &str| s.parse::<f64>(),
    )(i)
}

fn hex_sequence(i: &str) -> IResult<&str, &str> {
    preceded(alt((tag("0x"), tag("0X"))), hex_digit1)(i)
}

fn hex_integer(i: &str) -> IResult<&str, u64> {
    map_res(hex_sequence, |s| u64::from_str_radix(s, 16))(i)
}

fn resolution(i: &str) -> IResult<&str, Resolution> {
    map(
        separated_pair(integer, char('x'), integer),
        |(width, height)| Resolution { width, height },
    )(i)
}

fn byte_range(i: &str) -> IResult<&str, ByteRange> {
    map(
        pair(integer, opt(preceded(char('@'), integer))),
        |(length, offset)| ByteRange { length, offset },
    )(i)
}

fn playlist_type(i: &str) -> IResult<&str, PlaylistType> {
    alt((
        value(PlaylistType::Event, tag("EVENT")),
        value(PlaylistType::Vod, tag("VOD")),
    ))(i)
}

// EXTINF carries `<duration>,[title]`; the comma is tolerated when missing.
fn duration_title(i: &str) -> IResult<&str, (f64, Option<&str>)> {
    pair(float, opt(preceded(char(','), rest)))(i)
}

fn complete<'a, O, F>(i: &'a str, parser: F) -> Option<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(i).ok().map(|(_, o)| o)
}

/// Decimal integer with an optional leading `+`.
pub fn parse_integer(s: &str) -> Option<u64> {
    complete(s, |i| preceded(opt(char('+')), integer)(i))
}

/// Decimal, or hexadecimal when prefixed with `0x`/`0X`.
pub fn parse_integer_or_hex(s: &str) -> Option<u64> {
    complete(s, |i| alt((hex_integer, integer))(i))
}

pub fn parse_float(s: &str) -> Option<f64> {
    complete(s, float)
}

pub fn parse_hex_bytes(s: &str) -> Option<Vec<u8>> {
    complete(s, hex_sequence).and_then(|h| hex::decode(h).ok())
}

pub fn parse_resolution(s: &str) -> Option<Resolution> {
    complete(s, resolution)
}

pub fn parse_byte_range(s: &str) -> Option<ByteRange> {
    complete(s, byte_range)
}

pub fn parse_playlist_type(s: &str) -> Option<PlaylistType> {
    complete(s, playlist_type)
}

pub fn parse_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// Returns the duration and the title, if a non-empty one is present.
pub fn parse_duration_title(s: &str) -> Option<(f64, Option<&str>)> {
    complete(s, duration_title).map(|(d, t)| (d, t.filter(|t| !t.is_empty())))
}
