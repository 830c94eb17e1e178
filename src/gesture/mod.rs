//! Gesture module - per-frame pose classification and dwell-time debouncing
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod debounce;

pub use classifier::{
    classify, hand_world_position, palm_center, Gesture, HandLandmark,
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use debounce::GestureDebouncer;
