/// Connection string for a private, in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";
