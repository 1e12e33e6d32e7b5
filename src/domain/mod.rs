//! Value types for a single loan quote: the tenor, the request, the rounded quote.

pub mod loan;
pub mod money;
