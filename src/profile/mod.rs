//! Skill profiles and how sessions update them

pub mod skill_profile;
pub mod updater;

pub use skill_profile::{create_initial_profile, SkillDimension, SkillProfile};
pub use updater::{adaptation_rate, reaction_time_to_rating, update_profile};
