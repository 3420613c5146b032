//! Text based values

use chrono::{NaiveDate, NaiveDateTime};
use encoding_rs::{Encoding, EUC_JP, UTF_16LE, WINDOWS_1252};

use super::{RawField, Wire};
use crate::error::{Error, Result};
use crate::internal::WireType;

pub const DATE_FORMAT: &str = "%Y:%m:%d";
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// `ASCII` field decoded with a fallback charset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    pub encoding: &'static Encoding,
}

impl Text {
    pub fn new(text: impl Into<String>, encoding: &'static Encoding) -> Self {
        Self {
            text: text.into(),
            encoding,
        }
    }

    /// Everything after the first NULL is ignored
    pub(crate) fn decode(raw: &RawField) -> Result<Self> {
        let (text, _) = raw.encoding.decode_without_bom_handling(until_nul(raw.data));
        Ok(Self::new(text, raw.encoding))
    }

    /// Encoded text with NULL terminator
    pub(crate) fn to_wire(&self) -> Result<Wire> {
        let (bytes, _, _) = self.encoding.encode(&self.text);
        let mut payload = bytes.into_owned();
        payload.push(0);
        Wire::new(WireType::Ascii, payload)
    }
}

/// Charset header of `UserComment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Ascii,
    /// JIS X0208-1990
    Jis,
    /// UTF-16 little endian
    Unicode,
    Undefined,
}

impl Charset {
    pub const HEADER_LEN: usize = 8;

    pub fn header(self) -> [u8; Self::HEADER_LEN] {
        match self {
            Self::Ascii => *b"ASCII\0\0\0",
            Self::Jis => *b"JIS\0\0\0\0\0",
            Self::Unicode => *b"Unicode\0",
            Self::Undefined => [0; Self::HEADER_LEN],
        }
    }

    /// Charset for a header, compared case-insensitively
    ///
    /// The all NULL header of `Undefined` matches as well, so that it is not
    /// kept as part of the text.
    pub fn from_header(header: &[u8]) -> Option<Self> {
        [Self::Ascii, Self::Jis, Self::Unicode, Self::Undefined]
            .into_iter()
            .find(|x| x.header().eq_ignore_ascii_case(header))
    }

    fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Ascii | Self::Undefined => decode_ascii(bytes),
            Self::Jis => EUC_JP.decode_without_bom_handling(bytes).0.into_owned(),
            Self::Unicode => UTF_16LE.decode_without_bom_handling(bytes).0.into_owned(),
        }
    }

    fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Ascii | Self::Undefined => WINDOWS_1252.encode(text).0.into_owned(),
            Self::Jis => EUC_JP.encode(text).0.into_owned(),
            Self::Unicode => utf16le(text),
        }
    }
}

/// Text with a leading charset header, as used by `UserComment`
///
/// ```
/// # use exifmeta::property::{Charset, EncodedText};
/// let text = EncodedText::new(Charset::Unicode, "Hi");
/// assert_eq!(text.to_bytes(), b"Unicode\0H\0i\0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub charset: Charset,
    pub text: String,
}

impl EncodedText {
    pub fn new(charset: Charset, text: impl Into<String>) -> Self {
        Self {
            charset,
            text: text.into(),
        }
    }

    /// Payloads without a known header are read as ASCII as a whole
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let header = bytes
            .get(..Charset::HEADER_LEN)
            .and_then(Charset::from_header);

        match (header, bytes.get(Charset::HEADER_LEN..)) {
            (Some(charset), Some(rest)) => {
                let mut text = charset.decode(rest);
                trim_trailing_nul(&mut text);
                Self { charset, text }
            }
            _ => {
                let mut text = decode_ascii(bytes);
                trim_trailing_nul(&mut text);
                Self {
                    charset: Charset::Undefined,
                    text,
                }
            }
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.charset.header().to_vec();
        bytes.extend(self.charset.encode(&self.text));
        bytes
    }
}

/// Windows XP tags store UTF-16LE text as `BYTE`
pub(crate) fn decode_windows_string(bytes: &[u8]) -> String {
    let mut text = UTF_16LE.decode_without_bom_handling(bytes).0.into_owned();
    trim_trailing_nul(&mut text);
    text
}

/// No terminator is added
pub(crate) fn encode_windows_string(text: &str) -> Vec<u8> {
    utf16le(text)
}

/// Four character version like `0230`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    /// Stored as four characters in an `UNDEFINED` field
    Ascii(String),
    /// Stored as four numbers in a `BYTE` field, like `GPSVersionID`
    Digits([u8; 4]),
}

impl Version {
    pub const LEN: usize = 4;

    /// Pads with spaces or truncates to four characters
    ///
    /// ```
    /// # use exifmeta::property::Version;
    /// assert_eq!(Version::ascii("02"), Version::Ascii(String::from("02  ")));
    /// assert_eq!(Version::ascii("02301"), Version::Ascii(String::from("0230")));
    /// ```
    pub fn ascii(version: &str) -> Self {
        let mut chars = version.chars().take(Self::LEN).collect::<String>();
        while chars.chars().count() < Self::LEN {
            chars.push(' ');
        }
        Self::Ascii(chars)
    }

    pub(crate) fn decode_ascii(raw: &RawField) -> Result<Self> {
        raw.expect_type(&[WireType::Undefined, WireType::Ascii, WireType::Byte])?;
        Ok(Self::ascii(&decode_ascii(raw.data)))
    }

    pub(crate) fn decode_digits(raw: &RawField) -> Result<Self> {
        raw.expect_type(&[WireType::Byte, WireType::Undefined])?;
        let digits = raw.data.try_into().map_err(|_| raw.invalid_count())?;
        Ok(Self::Digits(digits))
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        match self {
            Self::Ascii(version) => {
                if !version.is_ascii() {
                    return Err(Error::InvalidVersion(version.clone()));
                }
                let mut bytes = version.as_bytes().to_vec();
                bytes.resize(Self::LEN, b' ');
                Wire::new(WireType::Undefined, bytes)
            }
            Self::Digits(digits) => Wire::new(WireType::Byte, digits.to_vec()),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii(version) => f.write_str(version),
            Self::Digits([a, b, c, d]) => write!(f, "{a}.{b}.{c}.{d}"),
        }
    }
}

pub(crate) fn decode_date(raw: &RawField) -> Result<NaiveDate> {
    raw.expect_type(&[WireType::Ascii])?;
    let text = decode_ascii(until_nul(raw.data));
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text))
}

pub(crate) fn decode_date_time(raw: &RawField) -> Result<NaiveDateTime> {
    raw.expect_type(&[WireType::Ascii])?;
    let text = decode_ascii(until_nul(raw.data));
    NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT).map_err(|_| Error::InvalidDate(text))
}

/// `YYYY:MM:DD` with NULL terminator, 11 bytes
pub(crate) fn date_to_wire(date: &NaiveDate) -> Result<Wire> {
    ascii_to_wire(date.format(DATE_FORMAT).to_string())
}

/// `YYYY:MM:DD HH:MM:SS` with NULL terminator, 20 bytes
pub(crate) fn date_time_to_wire(date_time: &NaiveDateTime) -> Result<Wire> {
    ascii_to_wire(date_time.format(DATE_TIME_FORMAT).to_string())
}

fn ascii_to_wire(text: String) -> Result<Wire> {
    let mut payload = text.into_bytes();
    payload.push(0);
    Wire::new(WireType::Ascii, payload)
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    bytes.split(|x| *x == 0).next().unwrap_or_default()
}

fn trim_trailing_nul(text: &mut String) {
    let len = text.trim_end_matches('\0').len();
    text.truncate(len);
}

/// Windows-1252 maps every byte, so arbitrary bytes survive a round trip
fn decode_ascii(bytes: &[u8]) -> String {
    WINDOWS_1252
        .decode_without_bom_handling(bytes)
        .0
        .into_owned()
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
