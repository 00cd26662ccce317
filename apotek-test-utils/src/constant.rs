pub static TEST_MEDIA_API_KEY: &str = "test_media_api_key";
/// Base URL the mock media store hands out for uploaded files
pub static TEST_CDN_URL: &str = "https://cdn.test";
