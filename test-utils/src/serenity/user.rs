//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `discriminator` - Legacy four digit discriminator, `None` for migrated accounts
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let user = create_test_user(123456789, "Officer", Some(42));
/// assert_eq!(user.tag(), "Officer#0042");
/// ```
pub fn create_test_user(user_id: u64, name: &str, discriminator: Option<u16>) -> User {
    let discriminator = discriminator
        .map(|d| format!("{:04}", d))
        .unwrap_or_else(|| "0".to_string());

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": discriminator,
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
