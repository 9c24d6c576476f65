// SPDX-License-Identifier: CC0-1.0

mod decode;
mod record;

pub use decode::{MAX_BASE, MIN_BASE, decode_in_base, parse_base};
pub use record::{Point, ShareConfig, ShareData, ShareRecord};
