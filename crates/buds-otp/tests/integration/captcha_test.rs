use buds_domain::captcha::{CAPTCHA_ALPHABET, CAPTCHA_LEN};
use buds_otp::captcha;

#[test]
fn should_verify_case_insensitively() {
    assert!(captcha::verify("ab12cd", "AB12CD"));
    assert!(!captcha::verify("xyz999", "AB12CD"));
}

#[test]
fn should_generate_six_characters_from_unambiguous_alphabet() {
    let challenge = captcha::generate();
    assert_eq!(challenge.text.len(), CAPTCHA_LEN);
    assert!(challenge.text.bytes().all(|b| CAPTCHA_ALPHABET.contains(&b)));
    assert_eq!(challenge.text, challenge.challenge);
}

#[test]
fn should_verify_own_challenge_in_any_case() {
    let challenge = captcha::generate();
    assert!(captcha::verify(&challenge.text, &challenge.challenge));
    assert!(captcha::verify(
        &challenge.text.to_lowercase(),
        &challenge.challenge
    ));
}

#[test]
fn should_invalidate_old_text_after_regeneration() {
    let first = captcha::generate();
    // The alphabet gives 32^6 possibilities; loop past the freak collision.
    let second = loop {
        let candidate = captcha::generate();
        if candidate.text != first.text {
            break candidate;
        }
    };

    assert!(!captcha::verify(&first.text, &second.challenge));
    assert!(captcha::verify(&second.text, &second.challenge));
}
