pub static TEST_TOKEN: &str = "test-jwt-token";
pub static TEST_EMAIL: &str = "admin@seaview.example";
pub static TEST_FULL_NAME: &str = "Ana Admin";
pub static TEST_PASSWORD: &str = "correct horse battery";

pub const TEST_USER_ID: i64 = 7;
pub const TEST_HOTEL_ID: i64 = 3;
pub const TEST_TECHNICIAN_ID: i64 = 11;
