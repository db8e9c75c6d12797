pub use super::results::Entity as Results;
pub use super::scoreboard::Entity as Scoreboard;
pub use super::team::Entity as Team;
