//! Conversions between the textual forms of IPv4 addresses and masks and
//! their 32-bit integer values.

use crate::error::Error;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::net::Ipv4Addr;

/// 255.255.255.255
pub const ALL_ONES: u32 = u32::MAX;

/// Longest prefix length of an IPv4 mask.
pub const MAX_PREFIX: u8 = 32;

lazy_static! {
    static ref DOTTED: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Not possible");
}

/// Converts `"a.b.c.d"` into its big-endian 32-bit value.
///
/// Exactly four octets are required, each within `0..=255`.
pub fn dotted_decimal_to_u32(s: &str) -> Result<u32, Error> {
    fn octet(ind: usize, v: &Captures<'_>, s: &str) -> Result<u8, Error> {
        v.get(ind)
            .and_then(|r| r.as_str().parse::<u8>().ok())
            .ok_or_else(|| Error::InvalidAddress(s.to_owned()))
    }

    let v = DOTTED
        .captures(s)
        .ok_or_else(|| Error::InvalidAddress(s.to_owned()))?;
    Ok(u32::from_be_bytes([
        octet(1, &v, s)?,
        octet(2, &v, s)?,
        octet(3, &v, s)?,
        octet(4, &v, s)?,
    ]))
}

pub fn u32_to_dotted_decimal(a: u32) -> String {
    Ipv4Addr::from(a).to_string()
}

/// Mask with the `prefix` most significant bits set.
pub fn prefix_to_mask(prefix: u8) -> Result<u32, Error> {
    if prefix > MAX_PREFIX {
        return Err(Error::InvalidPrefix(prefix.to_string()));
    }
    Ok(ALL_ONES
        .checked_shl(u32::from(MAX_PREFIX - prefix))
        .unwrap_or(0))
}

/// Parses a prefix length written without the leading `/` into its mask.
pub fn parse_prefix(s: &str) -> Result<u32, Error> {
    let prefix = s
        .parse::<u8>()
        .map_err(|_| Error::InvalidPrefix(s.to_owned()))?;
    prefix_to_mask(prefix).map_err(|_| Error::InvalidPrefix(s.to_owned()))
}

/// Prefix length of a contiguous mask, `None` otherwise.
pub fn mask_to_prefix(mask: u32) -> Option<u8> {
    if is_contiguous(mask) {
        Some(mask.leading_ones() as u8)
    } else {
        None
    }
}

/// True when the 1-bits of `mask` form one run starting at the top bit.
pub fn is_contiguous(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == u32::from(MAX_PREFIX)
}
