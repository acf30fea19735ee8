use crate::access_gate::domain::model::value_objects::user_email::UserEmail;

/// Friendly name shown on the denial page, derived from the email local part:
/// `john.doe_smith@example.com` becomes `John Doe Smith`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn from_email(email: &UserEmail) -> Self {
        let spaced = email.local_part().replace(['.', '_'], " ");
        Self(title_case(&spaced))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Uppercases the first letter of every run of letters and lowercases the
/// rest, so `o'neil2x` becomes `O'Neil2X`.
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(c);
            previous_is_letter = false;
        }
    }

    output
}
