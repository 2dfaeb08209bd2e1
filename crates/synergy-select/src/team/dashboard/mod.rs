mod format;
mod summary;
pub mod views;

pub use format::{currency, grouped, out_of, per_month, percent};
pub use summary::{role_mix, PERFORMANCE_SCALE_MAX, ROLE_PALETTE};
