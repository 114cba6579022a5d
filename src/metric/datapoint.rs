use chrono::{DateTime, TimeZone, Utc};
use metric::TagMap;

/// One OpenTSDB data point, the parsed form of one line.
///
/// A `DataPoint` is created fresh per parsed line and never mutated by
/// this crate afterward; the caller owns it outright. The timestamp is
/// milliseconds since the Unix epoch no matter which unit the line
/// used. The value is stored exactly as parsed, non-finite values
/// included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// The metric name.
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// The sampled value.
    pub value: f64,
    /// The point's key, value annotations, in the order the line
    /// presented them.
    pub tags: TagMap,
}

impl DataPoint {
    /// The point's timestamp as a wall-clock instant.
    pub fn time(&self) -> DateTime<Utc> {
        Utc.timestamp_millis(self.timestamp)
    }
}
