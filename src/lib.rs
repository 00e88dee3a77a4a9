//! IPv4 subnet arithmetic.
//!
//! [`AddressRange`] pairs a 32-bit address with a 32-bit mask and derives
//! network and broadcast addresses from them. [`summarize`] turns an
//! inclusive address range into the fewest CIDR blocks that cover it, and
//! [`overlap`] uses it to list the blocks two networks share.
//!
//! ```
//! use ipcalc::{overlap, AddressRange};
//!
//! let a: AddressRange = "10.10.20.0/21".parse().unwrap();
//! let b: AddressRange = "10.10.20.0/24".parse().unwrap();
//! let shared: Vec<String> = overlap(&a, &b)
//!     .iter()
//!     .map(|n| n.to_cidr().unwrap())
//!     .collect();
//! assert_eq!(vec!["10.10.20.0/24"], shared);
//! ```

pub mod convert;
pub mod error;
pub mod ipv4;
pub mod summarize;

pub use convert::ALL_ONES;
pub use error::Error;
pub use ipv4::AddressRange;
pub use summarize::{overlap, summarize};
