//! Token scanning over `|`-separated range lists
//!
//! Range text for select, enum and multi parameters looks like
//! `red | green | yellow`. A token matches only when bounded on both sides by
//! start or end of text, `|`, or whitespace, so `red` never matches inside
//! `redgreen`.

pub mod scanner;

pub use scanner::{find_token, index, index_of, tokenize, TokenIter};
