//! Pointer interaction with laid-out containers.

pub mod raycaster;

pub use raycaster::{pick_slot, screen_to_ray, slot_bounds, Aabb, SlotHit};
