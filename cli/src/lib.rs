//! `ts-engine` CLI tools.
//!
//! ## Getting started
//!
//! ```doc
//! ❯ tsdbcli write --db metrics --series cpu --field value:float --point 100:0:1.0
//! ❯ tsdbcli query --db metrics --series cpu --columns value --start 0 --end 1000
//! ```

pub mod trace;
