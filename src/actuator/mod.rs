pub mod gripper;
pub mod log;
