use thiserror::Error;

/// Errors raised while parsing or summarizing IPv4 ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `start` is greater than `stop`.
    #[error("Range arguments out of order: {start} > {stop}.")]
    InvalidRange { start: u32, stop: u32 },

    /// The mask has 1-bits that do not form a single high-order run.
    #[error("Cannot represent discontiguous subnet mask {0:#010x} in CIDR notation.")]
    DiscontiguousMask(u32),

    /// An aligned block ran past the end of the range being summarized.
    #[error("Block at {start} with broadcast {broadcast} overshoots range end {stop}.")]
    InternalInvariant { start: u32, stop: u32, broadcast: u32 },

    #[error("Invalid dotted decimal address: {0:?}.")]
    InvalidAddress(String),

    #[error("Invalid CIDR prefix length: {0:?}.")]
    InvalidPrefix(String),

    #[error("Invalid format: {0:?}.")]
    InvalidFormat(String),
}
