pub mod grade;
pub mod record;
