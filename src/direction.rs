use std::fmt;

/// The orientation of an edge record relative to the node that stores it.
///
/// Every connection is stored twice, once on each end. An `Out` record on one
/// side is always paired with an `In` record on the other; `None`, `Unknown`
/// and `Both` are stored identically on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(from = "i64", into = "u8"))]
pub enum Direction {
    /// `┄`
    #[default]
    Unknown = 0,
    /// `-`, undirected.
    None = 1,
    /// `←`
    In = 2,
    /// `→`
    Out = 3,
    /// `↔`
    Both = 4,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Unknown,
        Direction::None,
        Direction::In,
        Direction::Out,
        Direction::Both,
    ];

    /// Returns the tag stored on the other end of a connection created with
    /// this tag.
    pub fn complement(self) -> Direction {
        match self {
            Direction::In => Direction::Out,
            Direction::Out => Direction::In,
            other => other,
        }
    }

    /// Checks whether a stored tag satisfies a queried direction.
    ///
    /// `Both` is a superset of `In` and `Out` when querying; `None` and
    /// `Unknown` only ever match themselves.
    ///
    /// | queried   | matching stored tags |
    /// |-----------|----------------------|
    /// | `None`    | `None`               |
    /// | `In`      | `In`, `Both`         |
    /// | `Out`     | `Out`, `Both`        |
    /// | `Both`    | `In`, `Out`, `Both`  |
    /// | `Unknown` | `Unknown`            |
    pub fn matches(self, queried: Direction) -> bool {
        match queried {
            Direction::None => self == Direction::None,
            Direction::In => matches!(self, Direction::In | Direction::Both),
            Direction::Out => matches!(self, Direction::Out | Direction::Both),
            Direction::Both => matches!(self, Direction::In | Direction::Out | Direction::Both),
            Direction::Unknown => self == Direction::Unknown,
        }
    }

    /// Checks whether a walk using this selector crosses a record with the
    /// given stored tag. `In` and `Out` walks cross records tagged with the
    /// same direction or `Both`; every other selector crosses all records.
    pub(crate) fn crosses(self, stored: Direction) -> bool {
        match self {
            Direction::In | Direction::Out => stored == self || stored == Direction::Both,
            Direction::Unknown | Direction::None | Direction::Both => true,
        }
    }

    /// The rendering used in paths and diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::None => "-",
            Direction::In => "←",
            Direction::Out => "→",
            Direction::Both => "↔",
            Direction::Unknown => "┄",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts a numeric code; anything outside `0..=4` is `Unknown`.
impl From<i64> for Direction {
    fn from(code: i64) -> Self {
        match code {
            1 => Direction::None,
            2 => Direction::In,
            3 => Direction::Out,
            4 => Direction::Both,
            _ => Direction::Unknown,
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}
