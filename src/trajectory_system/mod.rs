pub mod ballistics;
pub mod kinematics;
pub mod pitch_search;
