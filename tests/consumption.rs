//! The namespaced, flat and prelude surfaces expose the same items.

use secrecy::SecretString;

#[test]
fn test_namespaced_and_flat_agree() {
    assert_eq!(utilkit::array::unique(&[3, 1, 3]), utilkit::unique(&[3, 1, 3]));
    assert_eq!(utilkit::string::snake_case("fooBar"), utilkit::snake_case("fooBar"));
    assert_eq!(
        utilkit::date::format("2024-03-15 08:05:09", "HH:mm:ss"),
        utilkit::format("2024-03-15 08:05:09", "HH:mm:ss")
    );
    assert_eq!(
        utilkit::validate::is_phone("13812345678"),
        utilkit::is_phone("13812345678")
    );
}

#[test]
fn test_prelude_exposes_modules_and_types() {
    use utilkit::prelude::*;

    assert_eq!(string::capitalize("hELLO"), "Hello");
    assert_eq!(array::chunk(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
    assert_eq!(date::get_days_in_year("2024"), 366);

    let pwd = SecretString::new("abc".to_string().into());
    let result: PasswordValidationResult =
        validate::validate_password(&pwd, &PasswordOptions::default());
    assert!(!result.is_valid);

    let strength: PasswordStrengthResult = validate::get_password_strength(&pwd);
    assert_eq!(strength.level, StrengthLevel::Weak);
}

#[test]
fn test_options_embed_in_host_config() {
    #[derive(serde::Deserialize)]
    struct HostConfig {
        password: utilkit::PasswordOptions,
    }

    let config: HostConfig =
        serde_json::from_str(r#"{"password": {"min_length": 12, "require_special_char": false}}"#)
            .expect("valid config");
    assert_eq!(config.password.min_length, 12);
    assert!(!config.password.require_special_char);
    assert!(config.password.require_number);
}

#[cfg(feature = "async")]
#[tokio::test(start_paused = true)]
async fn test_animation_reachable_from_root() {
    use utilkit::animation::TokioFrameClock;
    use utilkit::{AnimationOptions, AnimationOutcome, animate};

    let clock = TokioFrameClock::new();
    let mut last = 0.0;
    let outcome = animate(&clock, &AnimationOptions::default(), None, |p| last = p).await;

    assert_eq!(outcome, AnimationOutcome::Completed);
    assert_eq!(last, 1.0);
}
