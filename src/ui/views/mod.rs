pub mod leaderboard;
pub mod quiz;
pub mod review;
pub mod setup;
