//! Embedded target list
//!
//! Compiled into the binary at build time from `data/targets.txt`.

include!(concat!(env!("OUT_DIR"), "/targets.rs"));
