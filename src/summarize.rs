//! Range to CIDR summarization, and the overlap of two networks built on it.

use crate::convert::ALL_ONES;
use crate::error::Error;
use crate::ipv4::AddressRange;
use log::{debug, error, trace};

const TOP_BIT: u32 = 0x8000_0000;

/// Splits the inclusive range `[start, stop]` into the fewest CIDR blocks
/// that cover it exactly, in ascending order.
///
/// Each step takes the largest block that starts at the current address,
/// is aligned to its own size and ends no later than `stop`.
pub fn summarize(start: u32, stop: u32) -> Result<Vec<AddressRange>, Error> {
    if start > stop {
        return Err(Error::InvalidRange { start, stop });
    }
    let mut blocks = Vec::new();
    let mut next = start;
    loop {
        let block = first_block(next, stop);
        trace!(
            "[{}, {}]: block {} {:#010x}",
            next,
            stop,
            block.address(),
            block.mask()
        );
        blocks.push(block);
        let broadcast = check_block(&block, stop)?;
        if broadcast == stop {
            return Ok(blocks);
        }
        next = broadcast + 1;
    }
}

/// Largest aligned block at `start` that does not pass `stop`.
fn first_block(start: u32, stop: u32) -> AddressRange {
    // low bits that must vary to reach stop from start
    let width = 32 - (start ^ stop).leading_zeros();
    let mut block = AddressRange::new(start, ALL_ONES.checked_shl(width).unwrap_or(0));
    // At ALL_ONES the block is start itself, so this ends.
    while block.network() != start || block.broadcast() > stop {
        block = AddressRange::new(start, TOP_BIT | (block.mask() >> 1));
    }
    block
}

fn check_block(block: &AddressRange, stop: u32) -> Result<u32, Error> {
    let broadcast = block.broadcast();
    if broadcast > stop {
        error!(
            "Block {} {:#010x} ends at {} past range end {}",
            block.address(),
            block.mask(),
            broadcast,
            stop
        );
        return Err(Error::InternalInvariant {
            start: block.address(),
            stop,
            broadcast,
        });
    }
    Ok(broadcast)
}

/// The CIDR blocks shared by `n1` and `n2`, each taken as the interval
/// `[address, broadcast]`.
///
/// Disjoint networks give an empty list. The result does not depend on
/// argument order.
pub fn overlap(n1: &AddressRange, n2: &AddressRange) -> Vec<AddressRange> {
    if n1 == n2 {
        return vec![*n1];
    }
    let (lo, hi) = if (n1.address(), n1.mask()) <= (n2.address(), n2.mask()) {
        (n1, n2)
    } else {
        (n2, n1)
    };

    let start = hi.address();
    let stop = lo.broadcast().min(hi.broadcast());
    if stop < start || start > lo.broadcast() {
        debug!("No overlap between {} and {}", lo, hi);
        return Vec::new();
    }

    summarize(start, stop).unwrap_or_else(|e| {
        debug!("No overlap between {} and {}: {}", lo, hi, e);
        Vec::new()
    })
}
