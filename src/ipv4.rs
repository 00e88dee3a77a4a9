use crate::convert::{self, ALL_ONES};
use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address together with its network mask.
///
/// Network and broadcast addresses are always derived from the two fields,
/// so a value can never disagree with itself. The address is kept as
/// given: `10.244.170.8/24` is not rewritten to `10.244.170.0/24`.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct AddressRange {
    address: u32,
    mask: u32,
}

impl AddressRange {
    pub fn new(address: u32, mask: u32) -> Self {
        AddressRange { address, mask }
    }

    pub fn from_prefix(address: u32, prefix: u8) -> Result<Self, Error> {
        Ok(AddressRange::new(address, convert::prefix_to_mask(prefix)?))
    }

    /// A single address, `/32`.
    pub fn host(address: u32) -> Self {
        AddressRange::new(address, ALL_ONES)
    }

    /// Parses `"10.20.30.40 255.255.255.0"`. The mask may be discontiguous.
    pub fn from_addr_and_mask(s: &str) -> Result<Self, Error> {
        let v: Vec<&str> = s.split(' ').collect();
        if v.len() != 2 {
            return Err(Error::InvalidFormat(s.to_owned()));
        }
        Ok(AddressRange::new(
            convert::dotted_decimal_to_u32(v[0])?,
            convert::dotted_decimal_to_u32(v[1])?,
        ))
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn network(&self) -> u32 {
        self.address & self.mask
    }

    pub fn broadcast(&self) -> u32 {
        self.address | !self.mask
    }

    /// True if every address of `self` lies within `other`, comparing the
    /// `[address, broadcast]` bounds of both.
    pub fn is_in(&self, other: &AddressRange) -> bool {
        self.address >= other.address && self.broadcast() <= other.broadcast()
    }

    pub fn is_contiguous(&self) -> bool {
        convert::is_contiguous(self.mask)
    }

    pub fn prefix_len(&self) -> Option<u8> {
        convert::mask_to_prefix(self.mask)
    }

    pub fn to_cidr(&self) -> Result<String, Error> {
        match self.prefix_len() {
            Some(prefix) => Ok(format!("{}/{}", Ipv4Addr::from(self.address), prefix)),
            None => Err(Error::DiscontiguousMask(self.mask)),
        }
    }
}

/// Parses CIDR text. Without a `/n` suffix the mask is `/32`.
impl FromStr for AddressRange {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^([0-9.]+)(/([0-9]+))?$").expect("Not possible");
        }
        match RE.captures(s) {
            Some(ref v) => {
                let address = v
                    .get(1)
                    .map(|r| convert::dotted_decimal_to_u32(r.as_str()))
                    .ok_or_else(|| Error::InvalidFormat(s.to_owned()))??;
                let mask = match v.get(3) {
                    Some(p) => convert::parse_prefix(p.as_str())?,
                    _ => ALL_ONES,
                };
                Ok(AddressRange::new(address, mask))
            }
            _ => Err(Error::InvalidFormat(s.to_owned())),
        }
    }
}

/// Renders `address mask` in dotted decimal, valid for any mask.
impl Display for AddressRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}",
            Ipv4Addr::from(self.address),
            Ipv4Addr::from(self.mask)
        )
    }
}
