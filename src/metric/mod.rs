//! The data that comes out of a parse. A `DataPoint` is one OpenTSDB
//! measurement; its tags live in a `TagMap`.

mod datapoint;
mod tagmap;

pub use self::datapoint::DataPoint;

/// The tag collection attached to each `DataPoint`. Keys and values
/// are plain strings, kept in the order the line presented them.
pub type TagMap = self::tagmap::TagMap<String, String>;
