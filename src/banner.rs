// src/banner.rs
//! Banner state machine: [`BannerMachine`], [`BannerSurface`] and the
//! element-id contract.

mod machine;
mod surface;

pub use machine::{BannerAction, BannerMachine, BannerState};
pub use surface::{element_ids, BannerSurface, NullSurface, SurfaceHandle};
