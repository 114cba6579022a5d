//! Parse the OpenTSDB line protocol.
//!
//! OpenTSDB moves data points as single lines of text:
//!
//! - `<metric> <timestamp> <value> [<key>=<value> ...]` on the wire,
//! - `put <metric> <timestamp> <value> [<key>=<value> ...]` through the
//!   telnet style API.
//!
//! Both shapes are handled by one non-anchored scan: the parser hunts
//! for the first metric, timestamp, value triple anywhere in the line,
//! so a leading `put` -- or any other noise ahead of the triple -- is
//! skipped rather than rejected. Everything after the triple is combed
//! for `key=value` tags.

use metric::{DataPoint, TagMap};
use regex::Regex;
use std::error;
use std::fmt;
use std::str::FromStr;

/// The millisecond representation of 2000-01-01T00:00:00Z.
///
/// Integer timestamps below this threshold are taken to be seconds and
/// scaled to milliseconds; anything at or above it passes through
/// unscaled. This is a heuristic, not a format flag: a millisecond
/// timestamp from before 2000 will be misread as seconds and scaled
/// 1000x. Kept as-is for wire compatibility.
pub const EPOCH_THRESHOLD_MS: i64 = 946_684_800_000;

lazy_static! {
    static ref METRIC_PATTERN: Regex =
        Regex::new(r"(\S+)\s+(\d+)\s+(-?[0-9.]+)").unwrap();
    static ref KEY_VALUE_PATTERN: Regex = Regex::new(r"(\S+?)=(\S+)").unwrap();
}

/// The transport flavor a parser is configured for.
///
/// The names match the values accepted by the `protocol.type`
/// configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// The standard OpenTSDB wire format.
    WireProtocol,
    /// The format associated with the `put` command of the OpenTSDB
    /// telnet style API.
    TelnetProtocol,
}

impl Default for ParseMode {
    fn default() -> ParseMode {
        ParseMode::WireProtocol
    }
}

impl ParseMode {
    /// Map a `protocol.type` configuration name onto a mode. Unknown
    /// names are rejected with `None`.
    pub fn from_name(name: &str) -> Option<ParseMode> {
        match name {
            "WireProtocol" => Some(ParseMode::WireProtocol),
            "TelnetProtocol" => Some(ParseMode::TelnetProtocol),
            _ => None,
        }
    }
}

/// Configuration for the OpenTSDB line parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpentsdbParseConfig {
    /// Which transport flavor the parser expects. The scan itself is
    /// identical in both modes -- the telnet `put` prefix falls out of
    /// the non-anchored match -- so the mode is carried for hosts that
    /// need to surface or validate it, not to change behavior.
    pub protocol_type: ParseMode,
}

impl Default for OpentsdbParseConfig {
    fn default() -> OpentsdbParseConfig {
        OpentsdbParseConfig {
            protocol_type: ParseMode::WireProtocol,
        }
    }
}

/// Parse failures for a single OpenTSDB line.
///
/// Every variant carries the complete input line so an operator can
/// locate the offending record in their stream. Failures are
/// deterministic: the same line fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No metric, timestamp, value triple could be located anywhere in
    /// the line.
    MalformedLine {
        /// The complete input line.
        line: String,
    },
    /// A triple was located but its timestamp field did not parse as a
    /// 64 bit integer.
    InvalidTimestamp {
        /// The offending timestamp text.
        input: String,
        /// The complete input line.
        line: String,
    },
    /// A triple was located but its value field did not parse as a 64
    /// bit float.
    InvalidValue {
        /// The offending value text.
        input: String,
        /// The complete input line.
        line: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedLine { ref line } => {
                write!(f, "no metric, timestamp and value triple in {:?}", line)
            }
            Error::InvalidTimestamp {
                ref input,
                ref line,
            } => write!(f, "could not parse timestamp {:?} in {:?}", input, line),
            Error::InvalidValue {
                ref input,
                ref line,
            } => write!(f, "could not parse value {:?} in {:?}", input, line),
        }
    }
}

impl error::Error for Error {}

/// Parser for single lines of OpenTSDB input.
///
/// A `LineParser` holds no state beyond its configuration: parsing is
/// a pure function of the input line, so one parser may be shared and
/// invoked from any number of threads without synchronization.
#[derive(Debug, Clone)]
pub struct LineParser {
    mode: ParseMode,
}

impl Default for LineParser {
    fn default() -> LineParser {
        LineParser::new(OpentsdbParseConfig::default())
    }
}

impl LineParser {
    /// Create a new parser from configuration.
    pub fn new(config: OpentsdbParseConfig) -> LineParser {
        LineParser {
            mode: config.protocol_type,
        }
    }

    /// The transport flavor this parser was configured with.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one line of OpenTSDB input.
    ///
    /// `None` input means there was nothing to parse and yields
    /// `Ok(None)`; this is distinct from a malformed line, which is an
    /// `Err`. A `Some` line either produces a complete `DataPoint` or
    /// fails -- there is no partial success.
    ///
    /// Timestamps below `EPOCH_THRESHOLD_MS` are interpreted as
    /// seconds and scaled to milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsdbline::protocols::opentsdb::LineParser;
    ///
    /// let parser = LineParser::default();
    /// let pt = parser
    ///     .parse(Some("put mysql.bytes_received 1287333217 327810227706 host=db1"))
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(pt.name, "mysql.bytes_received");
    /// assert_eq!(pt.timestamp, 1287333217000);
    /// assert_eq!(pt.value, 327810227706.0);
    /// ```
    pub fn parse(&self, input: Option<&str>) -> Result<Option<DataPoint>, Error> {
        let text = match input {
            Some(text) => text,
            None => return Ok(None),
        };
        trace!("parse input = {:?}", text);

        let caps = match METRIC_PATTERN.captures(text) {
            Some(caps) => caps,
            None => {
                return Err(Error::MalformedLine {
                    line: text.to_string(),
                })
            }
        };
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        let timestamp_txt = caps.get(2).unwrap().as_str();
        let value_txt = caps.get(3).unwrap().as_str();
        trace!(
            "triple match at [{}, {}): name = {:?} timestamp = {:?} value = {:?}",
            whole.start(),
            whole.end(),
            name,
            timestamp_txt,
            value_txt
        );

        let timestamp = match i64::from_str(timestamp_txt) {
            Ok(t) => {
                // Heuristic epoch unit disambiguation. Values this
                // small can only be seconds.
                if t < EPOCH_THRESHOLD_MS {
                    t * 1000
                } else {
                    t
                }
            }
            Err(_) => {
                return Err(Error::InvalidTimestamp {
                    input: timestamp_txt.to_string(),
                    line: text.to_string(),
                })
            }
        };

        let value = match f64::from_str(value_txt) {
            Ok(f) => f,
            Err(_) => {
                return Err(Error::InvalidValue {
                    input: value_txt.to_string(),
                    line: text.to_string(),
                })
            }
        };

        let mut tags = TagMap::default();
        for kv in KEY_VALUE_PATTERN.captures_iter(&text[whole.end()..]) {
            let key = kv.get(1).unwrap().as_str();
            let val = kv.get(2).unwrap().as_str();
            trace!("tag {} = {}", key, val);
            tags.insert(key.to_string(), val.to_string());
        }

        Ok(Some(DataPoint {
            name: name.to_string(),
            timestamp: timestamp,
            value: value,
            tags: tags,
        }))
    }
}
