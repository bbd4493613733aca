pub mod answer;
pub mod home;
