//! Colorful `du`.
//!
//! colordu execs `du` with whatever arguments it was given, recolors the
//! size field of each output line with a magnitude-proportional color, and
//! forwards everything else (ordering, whitespace, stderr, exit status)
//! untouched. The colorscheme is selected once at startup via the
//! `COLORDU_SCHEME` environment variable.

pub mod config;
pub mod runner;
pub mod scheme;
pub mod transform;
