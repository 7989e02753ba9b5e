//! Runtime configuration, resolved once at startup.
//!
//! colordu defines no flags of its own (the whole argument vector belongs to
//! `du`), so configuration comes from the environment. It is resolved into a
//! plain struct here and passed explicitly to the transformer; nothing reads
//! the environment after startup.

use std::env;

use crate::scheme::Scheme;

/// Environment variable selecting the active colorscheme.
pub const SCHEME_ENV_VAR: &str = "COLORDU_SCHEME";

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The colorscheme applied to size tokens.
    pub scheme: Scheme,
    /// Byte size of one block, for plain integer size tokens. `du` prints
    /// 1024-byte blocks by default and 512-byte blocks under
    /// `POSIXLY_CORRECT`; using the same rule keeps the magnitude math in
    /// agreement with what `du` printed.
    pub block_size: u64,
}

impl Config {
    /// Read the process environment and resolve a [`Config`].
    pub fn from_env() -> Self {
        Self::resolve(
            env::var(SCHEME_ENV_VAR).ok().as_deref(),
            env::var_os("POSIXLY_CORRECT").is_some(),
        )
    }

    /// Pure resolution step, separated from the environment lookup.
    pub fn resolve(scheme_name: Option<&str>, posix_blocks: bool) -> Self {
        Config {
            scheme: scheme_name.map_or(Scheme::Sunset, Scheme::from_name),
            block_size: if posix_blocks { 512 } else { 1024 },
        }
    }
}
