//! Wire-format primitives shared by the schema registry and record codecs.
//!
//! All multibyte integers on the wire are little-endian.

pub mod encoding;
