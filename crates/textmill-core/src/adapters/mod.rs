//! Format adapters producing the normalized node tree
//!
//! Every adapter implements the same contract: decoded text plus options in,
//! a forest of normalized nodes out. Malformed input is a parse error, never
//! a repair attempt. The Markdown adapter lowers its input to HTML markup
//! and reuses the HTML adapter so both surface formats share one
//! classification path.

pub(crate) mod html;
pub(crate) mod markdown;
pub(crate) mod xml;
