//! # Form models and validation
//!
//! Each form keeps its raw field strings exactly as typed and validates into
//! the API request body. Validation runs before any network call; failures
//! come back as [`FieldErrors`] keyed by field name, for inline display.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`MealForm`] | name 1..=50 chars, description ≤ 100 chars (blank → absent), date `YYYY-MM-DD`, time `HH:MM` in 00:00–23:59 |
//! | [`SignInForm`] | valid e-mail, password ≥ 6 chars |
//! | [`SignUpForm`] | non-empty name, valid e-mail, password ≥ 6 chars |

use std::collections::BTreeMap;

use api::{AuthenticateRequest, Meal, MealInput, RegisterRequest};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

const NAME_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 100;
const PASSWORD_MIN: usize = 6;
const DEFAULT_TIME: &str = "12:00";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Meal create/update form.
#[derive(Debug, Clone, PartialEq)]
pub struct MealForm {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date: String,
    /// `HH:MM`, as produced by `<input type="time">`.
    pub time: String,
    pub is_on_diet: bool,
}

impl Default for MealForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            time: DEFAULT_TIME.to_string(),
            is_on_diet: true,
        }
    }
}

impl MealForm {
    /// Prefill from an existing meal for editing.
    pub fn from_meal(meal: &Meal) -> Self {
        let date = parse_meal_date(&meal.date)
            .unwrap_or_else(|| Local::now().date_naive())
            .format(DATE_FORMAT)
            .to_string();
        let time = if parse_time(&meal.time).is_some() {
            meal.time.clone()
        } else {
            DEFAULT_TIME.to_string()
        };

        Self {
            name: meal.name.clone(),
            description: meal.description.clone().unwrap_or_default(),
            date,
            time,
            is_on_diet: meal.is_on_diet,
        }
    }

    /// Validate, reading date and time as local wall-clock time.
    pub fn validate(&self) -> Result<MealInput, FieldErrors> {
        self.validate_in(&Local)
    }

    /// Validate, reading date and time in `tz`.
    pub fn validate_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<MealInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim().to_string();
        let name_len = name.chars().count();
        if name_len == 0 {
            errors.insert("name", "Nome muito curto");
        } else if name_len > NAME_MAX {
            errors.insert("name", "Nome muito longo");
        }

        let description = self.description.trim().to_string();
        if description.chars().count() > DESCRIPTION_MAX {
            errors.insert("description", "Descrição muito longa");
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok();
        if date.is_none() {
            errors.insert("date", "Data inválida");
        }

        let time = parse_time(&self.time);
        if time.is_none() {
            errors.insert("time", "Hora inválida");
        }

        let date_time: Option<DateTime<Utc>> = match (date, time) {
            (Some(d), Some(t)) => tz
                .from_local_datetime(&d.and_time(t))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        };
        if date.is_some() && time.is_some() && date_time.is_none() {
            // Wall-clock time skipped by a DST jump
            errors.insert("time", "Hora inválida");
        }

        let is_on_diet = self.is_on_diet;
        errors.into_result(|| MealInput {
            name,
            description: if description.is_empty() {
                None
            } else {
                Some(description)
            },
            date_time: date_time.unwrap_or_default(),
            is_on_diet,
        })
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<AuthenticateRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = self.email.trim().to_string();

        if !is_valid_email(&email) {
            errors.insert("email", "E-mail inválido");
        }
        check_password(&self.password, &mut errors);

        errors.into_result(|| AuthenticateRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if name.is_empty() {
            errors.insert("name", "Informe seu nome");
        }
        if !is_valid_email(&email) {
            errors.insert("email", "E-mail inválido");
        }
        check_password(&self.password, &mut errors);

        errors.into_result(|| RegisterRequest {
            name,
            email,
            password: self.password.clone(),
        })
    }
}

fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.chars().count() < PASSWORD_MIN {
        errors.insert("password", "A senha deve ter no mínimo 6 caracteres");
    }
}

/// Strict `HH:MM`, 00:00 through 23:59.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let hours = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minutes = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// One `@`, something before it, and a dotted domain after it.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Meal dates arrive either as RFC 3339 timestamps or as plain dates.
fn parse_meal_date(raw: &str) -> Option<NaiveDate> {
    parse_meal_date_in(raw, &Local)
}

fn parse_meal_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT))
        .ok()
}

/// `dd/mm/yyyy` for display. Unparseable input is shown as received.
pub(crate) fn format_meal_date(raw: &str) -> String {
    format_meal_date_in(raw, &Local)
}

fn format_meal_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_meal_date_in(raw, tz) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_meal() -> MealForm {
        MealForm {
            name: "Frango grelhado".to_string(),
            description: "200g de frango com legumes".to_string(),
            date: "2024-08-12".to_string(),
            time: "12:30".to_string(),
            is_on_diet: true,
        }
    }

    #[test]
    fn test_meal_form_defaults() {
        let form = MealForm::default();
        assert_eq!(form.time, "12:00");
        assert!(form.is_on_diet);
        assert!(NaiveDate::parse_from_str(&form.date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_valid_meal_combines_date_and_time() {
        let input = valid_meal().validate_in(&Utc).unwrap();
        assert_eq!(input.name, "Frango grelhado");
        assert_eq!(input.description.as_deref(), Some("200g de frango com legumes"));
        assert_eq!(input.date_time, Utc.with_ymd_and_hms(2024, 8, 12, 12, 30, 0).unwrap());
        assert!(input.is_on_diet);
    }

    #[test]
    fn test_fixed_offset_is_converted_to_utc() {
        let brt = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        let input = valid_meal().validate_in(&brt).unwrap();
        assert_eq!(input.date_time, Utc.with_ymd_and_hms(2024, 8, 12, 15, 30, 0).unwrap());
    }

    #[test]
    fn test_blank_description_is_absent() {
        let mut form = valid_meal();
        form.description = "   ".to_string();
        assert_eq!(form.validate_in(&Utc).unwrap().description, None);
    }

    #[test]
    fn test_meal_name_bounds() {
        let mut form = valid_meal();
        form.name = " ".to_string();
        assert_eq!(form.validate_in(&Utc).unwrap_err().get("name"), Some("Nome muito curto"));

        form.name = "x".repeat(51);
        assert_eq!(form.validate_in(&Utc).unwrap_err().get("name"), Some("Nome muito longo"));

        form.name = "x".repeat(50);
        assert!(form.validate_in(&Utc).is_ok());
    }

    #[test]
    fn test_description_limit() {
        let mut form = valid_meal();
        form.description = "a".repeat(101);
        let errors = form.validate_in(&Utc).unwrap_err();
        assert_eq!(errors.get("description"), Some("Descrição muito longa"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_time_format() {
        for bad in ["24:00", "12:60", "9:30", "12-30", "", "ab:cd", "12:300"] {
            let mut form = valid_meal();
            form.time = bad.to_string();
            assert_eq!(
                form.validate_in(&Utc).unwrap_err().get("time"),
                Some("Hora inválida"),
                "{bad} should be rejected"
            );
        }
        for good in ["00:00", "09:05", "23:59"] {
            let mut form = valid_meal();
            form.time = good.to_string();
            assert!(form.validate_in(&Utc).is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_bad_date() {
        let mut form = valid_meal();
        form.date = "2024-13-01".to_string();
        assert_eq!(form.validate_in(&Utc).unwrap_err().get("date"), Some("Data inválida"));
    }

    #[test]
    fn test_errors_accumulate() {
        let form = MealForm {
            name: String::new(),
            description: String::new(),
            date: String::new(),
            time: "99:99".to_string(),
            is_on_diet: false,
        };
        let errors = form.validate_in(&Utc).unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("date").is_some());
        assert!(errors.get("time").is_some());
    }

    #[test]
    fn test_from_meal_prefills() {
        let meal = Meal {
            id: "m1".to_string(),
            name: "Pizza".to_string(),
            description: None,
            date: "2024-08-12".to_string(),
            time: "20:15".to_string(),
            is_on_diet: false,
        };
        let form = MealForm::from_meal(&meal);
        assert_eq!(form.name, "Pizza");
        assert_eq!(form.description, "");
        assert_eq!(form.date, "2024-08-12");
        assert_eq!(form.time, "20:15");
        assert!(!form.is_on_diet);
    }

    #[test]
    fn test_from_meal_falls_back_on_odd_time() {
        let meal = Meal {
            id: "m1".to_string(),
            name: "Pizza".to_string(),
            description: Some("Calabresa".to_string()),
            date: "12/08/2024".to_string(),
            time: "8h".to_string(),
            is_on_diet: false,
        };
        let form = MealForm::from_meal(&meal);
        assert_eq!(form.date, "2024-08-12");
        assert_eq!(form.time, "12:00");
        assert_eq!(form.description, "Calabresa");
    }

    #[test]
    fn test_meal_date_display() {
        assert_eq!(format_meal_date_in("2024-08-12T15:00:00.000Z", &Utc), "12/08/2024");
        assert_eq!(format_meal_date_in("2024-08-12", &Utc), "12/08/2024");

        // Late UTC evening is already the next day further east
        let east = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_meal_date_in("2024-08-12T22:30:00Z", &east), "13/08/2024");

        assert_eq!(format_meal_date_in("amanhã", &Utc), "amanhã");
    }

    #[test]
    fn test_sign_in_validation() {
        let ok = SignInForm {
            email: " ana@example.com ".to_string(),
            password: "secret1".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.email, "ana@example.com");

        let errors = SignInForm {
            email: "ana@".to_string(),
            password: "123".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("E-mail inválido"));
        assert_eq!(errors.get("password"), Some("A senha deve ter no mínimo 6 caracteres"));
    }

    #[test]
    fn test_sign_up_validation() {
        let errors = SignUpForm {
            name: "  ".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("name"), Some("Informe seu nome"));
        assert_eq!(errors.get("email"), None);

        let request = SignUpForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(request.name, "Ana");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }
}
