//! The fixed password rule set

/// Characters the special-character rule accepts.
const SPECIAL_CHARS: &str = "!@#$%^&*()-=_+`~.,<>/?;:'\"|";

/// A single password rule: identifier, violation message, and predicate.
#[derive(Debug)]
pub struct PasswordRule {
    pub name: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl PasswordRule {
    /// Whether the rule holds for the given value.
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

fn check_length(value: &str) -> bool {
    let len = value.chars().count();
    (8..=20).contains(&len)
}

fn check_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

fn check_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

fn check_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn check_whitespace(value: &str) -> bool {
    !value.chars().any(|c| c.is_whitespace())
}

fn check_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// The six rules, in the order their violations are reported.
pub static PASSWORD_RULES: [PasswordRule; 6] = [
    PasswordRule {
        name: "length",
        message: "Password must be at least 8 characters long, and no more than 20.",
        check: check_length,
    },
    PasswordRule {
        name: "lowercase",
        message: "Password must contain at least one lowercase letter.",
        check: check_lowercase,
    },
    PasswordRule {
        name: "uppercase",
        message: "Password must contain at least one uppercase letter.",
        check: check_uppercase,
    },
    PasswordRule {
        name: "digit",
        message: "Password must contain at least one digit.",
        check: check_digit,
    },
    PasswordRule {
        name: "whitespace",
        message: "Password must not contain any whitespace characters.",
        check: check_whitespace,
    },
    PasswordRule {
        name: "special",
        message: "Password must contain at least one special character.",
        check: check_special,
    },
];

/// Rules the given value currently violates, in rule order.
pub fn violations(value: &str) -> Vec<&'static PasswordRule> {
    PASSWORD_RULES
        .iter()
        .filter(|rule| !rule.is_satisfied_by(value))
        .collect()
}
