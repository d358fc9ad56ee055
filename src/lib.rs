//! Sustainable moisturizer formulation scoring.
//!
//! [`domain::score_formulation`] maps six ingredient ratios to four clamped
//! scores. The desktop binary is a thin presentation layer over it.

pub mod domain;
pub mod util;
