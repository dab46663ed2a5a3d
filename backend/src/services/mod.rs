pub mod health;
pub mod milestones;
