//! Scenario tests driving scene systems through whole frames

mod frame_cycle;
mod camera_composition;
