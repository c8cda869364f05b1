use thiserror::Error;

/// Ways a record stream can fail to describe a valid dictionary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptStream {
    #[error("stream length {len} is not a multiple of the record width")]
    TruncatedRecord { len: usize },

    #[error("record {record} references entry {index} but only {entries} exist")]
    DanglingReference {
        record: usize,
        index: u16,
        entries: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz78Error {
    #[error("corrupt stream: {0}")]
    CorruptStream(#[from] CorruptStream),

    /// The encoder ran out of representable dictionary indices.
    #[error("dictionary capacity exceeded: no index available above {limit}")]
    CapacityExceeded { limit: u16 },
}

impl Lz78Error {
    /// Returns true for decode-time stream corruption.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Lz78Error::CorruptStream(_))
    }
}

pub type Result<T> = std::result::Result<T, Lz78Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_converts() {
        let err: Lz78Error = CorruptStream::TruncatedRecord { len: 4 }.into();
        assert!(err.is_corrupt());
        assert_eq!(
            err.to_string(),
            "corrupt stream: stream length 4 is not a multiple of the record width"
        );
    }

    #[test]
    fn test_capacity_message() {
        let err = Lz78Error::CapacityExceeded { limit: 65535 };
        assert!(!err.is_corrupt());
        assert_eq!(
            err.to_string(),
            "dictionary capacity exceeded: no index available above 65535"
        );
    }
}
