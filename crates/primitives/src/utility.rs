use rust_decimal::Decimal;
use validator::ValidationError;

const PASSWORD_MIN_LEN: usize = 12;
const PASSWORD_MAX_LEN: usize = 128;
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// 12 to 128 ASCII characters drawn from letters, digits and `!@#$%^&*`,
/// with at least one of each class.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(password_error("password_too_short"));
    }
    if password.len() > PASSWORD_MAX_LEN {
        return Err(password_error("password_too_long"));
    }

    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);

    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c))
    {
        return Err(password_error("password_invalid_character"));
    }

    let classes: [fn(&char) -> bool; 3] = [
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_digit,
    ];
    let has_classes = classes.iter().all(|class| password.chars().any(|c| class(&c)));

    if !has_classes || !password.chars().any(is_special) {
        return Err(password_error("password_policy_violation"));
    }

    Ok(())
}

fn password_error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param("min_length".into(), &PASSWORD_MIN_LEN);
    err.add_param("max_length".into(), &PASSWORD_MAX_LEN);
    err.add_param("special_chars".into(), &PASSWORD_SPECIALS);
    err
}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Nightly prices must fit NUMERIC(10,2) and cannot be negative.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative"));
    }

    if price.scale() > 2 {
        return Err(ValidationError::new("price_too_precise"));
    }

    if *price >= Decimal::new(100_000_000, 0) {
        return Err(ValidationError::new("price_too_large"));
    }

    Ok(())
}
