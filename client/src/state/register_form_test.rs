use super::*;

fn valid_form() -> RegisterForm {
    RegisterForm {
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
        password: "abcdef".to_owned(),
        confirm_password: "abcdef".to_owned(),
    }
}

// =============================================================
// validate_form
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(validate_form(&valid_form()), Ok(()));
}

#[test]
fn empty_form_reports_required_for_every_field() {
    let errors = validate_form(&RegisterForm::default()).unwrap_err();
    assert_eq!(errors.get(Field::Name), Some("Nome obrigatório"));
    assert_eq!(errors.get(Field::Email), Some("E-mail obrigatório"));
    assert_eq!(errors.get(Field::Password), Some("Senha obrigatória"));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Confirmação de senha obrigatória"));
}

#[test]
fn name_longer_than_limit_is_rejected() {
    let form = RegisterForm { name: "abcdefghijklmnop".to_owned(), ..valid_form() };
    assert_eq!(form.name.chars().count(), NAME_MAX_LEN + 1);
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.get(Field::Name), Some("Máximo de 15 caracteres"));
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn name_at_limit_is_accepted() {
    let form = RegisterForm { name: "abcdefghijklmno".to_owned(), ..valid_form() };
    assert_eq!(form.name.chars().count(), NAME_MAX_LEN);
    assert_eq!(validate_form(&form), Ok(()));
}

#[test]
fn name_limit_counts_characters_not_bytes() {
    let form = RegisterForm { name: "ããããããããããããããã".to_owned(), ..valid_form() };
    assert!(form.name.len() > NAME_MAX_LEN);
    assert_eq!(validate_form(&form), Ok(()));
}

#[test]
fn malformed_email_is_rejected() {
    let form = RegisterForm { email: "ana-at-x.com".to_owned(), ..valid_form() };
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("E-mail inválido"));
}

#[test]
fn mismatched_passwords_are_rejected_on_confirm_field() {
    let form = RegisterForm { confirm_password: "abcdeg".to_owned(), ..valid_form() };
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.get(Field::ConfirmPassword), Some("As senhas não conferem"));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn required_message_wins_over_mismatch() {
    let form = RegisterForm { confirm_password: String::new(), ..valid_form() };
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Confirmação de senha obrigatória"));
}

#[test]
fn required_message_wins_over_email_format() {
    let form = RegisterForm { email: String::new(), ..valid_form() };
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("E-mail obrigatório"));
}

#[test]
fn whitespace_only_passwords_count_as_filled() {
    let form = RegisterForm { password: "   ".to_owned(), confirm_password: "   ".to_owned(), ..valid_form() };
    assert_eq!(validate_form(&form), Ok(()));
}

#[test]
fn whitespace_only_name_counts_as_filled() {
    let form = RegisterForm { name: " ".to_owned(), ..valid_form() };
    assert_eq!(validate_form(&form), Ok(()));
}

// =============================================================
// prepare_submission
// =============================================================

#[test]
fn prepare_submission_renames_confirm_password() {
    let payload = prepare_submission(&valid_form()).unwrap();
    assert_eq!(
        payload,
        RegistrationPayload {
            name: "Ana".to_owned(),
            email: "ana@x.com".to_owned(),
            password: "abcdef".to_owned(),
            confirmpassword: "abcdef".to_owned(),
        }
    );
}

#[test]
fn prepare_submission_blocks_invalid_form() {
    let form = RegisterForm { confirm_password: "zzz".to_owned(), ..valid_form() };
    assert!(prepare_submission(&form).is_err());
}

// =============================================================
// FieldErrors / revalidate_field
// =============================================================

#[test]
fn field_errors_set_and_clear() {
    let mut errors = FieldErrors::default();
    assert!(errors.is_empty());
    errors.set(Field::Email, "E-mail inválido");
    assert!(!errors.is_empty());
    errors.clear(Field::Email);
    assert!(errors.is_empty());
}

#[test]
fn revalidate_clears_fixed_field() {
    let mut form = RegisterForm { email: "bad".to_owned(), ..valid_form() };
    let mut errors = validate_form(&form).unwrap_err();
    form.set(Field::Email, "ana@x.com".to_owned());
    revalidate_field(&mut errors, &form, Field::Email);
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn revalidate_updates_message_while_still_invalid() {
    let mut form = RegisterForm { email: String::new(), ..valid_form() };
    let mut errors = validate_form(&form).unwrap_err();
    form.set(Field::Email, "ana".to_owned());
    revalidate_field(&mut errors, &form, Field::Email);
    assert_eq!(errors.get(Field::Email), Some("E-mail inválido"));
}

#[test]
fn revalidate_leaves_quiet_fields_quiet() {
    let form = RegisterForm { email: "bad".to_owned(), ..valid_form() };
    let mut errors = FieldErrors::default();
    revalidate_field(&mut errors, &form, Field::Email);
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn input_names_match_form_markup() {
    let names: Vec<_> = Field::ALL.iter().map(|f| f.input_name()).collect();
    assert_eq!(names, ["name", "email", "password", "confirmPassword"]);
}
