//! Plan structure domain module

mod blocks;
mod outline;

pub use blocks::{HeadingLevel, PlanBlock, PlanTable};
pub use outline::PlanOutline;
