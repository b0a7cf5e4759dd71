use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Errors reported by checked mask operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// A lane index was not less than the number of lanes.
    IndexOutOfRange { index: usize },
    /// A lane of an expanded mask had some bits set and others clear.
    PartialLane { lane: usize },
}

impl Display for MaskError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index } => {
                write!(fmt, "lane index {} is out of range for 8 lanes", index)
            }
            Self::PartialLane { lane } => {
                write!(fmt, "lane {} is neither all-zeros nor all-ones", lane)
            }
        }
    }
}

impl Error for MaskError {}
