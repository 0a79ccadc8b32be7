use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{bail, Report};

/// A type representing the orientation of an aligned sequence relative to its reference
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Orientation {
    /// Sequence is aligned as is.
    Forward,
    /// Sequence is aligned as a reverse complement.
    Reverse,
    /// Orientation is unknown or irrelevant.
    #[default]
    Dual,
}

impl Orientation {
    /// Get the symbolic representation of the orientation.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
            Orientation::Dual => '.',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Orientation {
    type Error = Report;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Orientation::Forward),
            '-' => Ok(Orientation::Reverse),
            '.' => Ok(Orientation::Dual),
            _ => bail!("Invalid orientation symbol: {:?}", value),
        }
    }
}
