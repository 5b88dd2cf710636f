//! Embedded name list
//!
//! Compiled into the binary at build time from `data/names.txt`.

include!(concat!(env!("OUT_DIR"), "/names.rs"));
