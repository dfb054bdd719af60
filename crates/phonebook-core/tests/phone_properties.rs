use phonebook_core::domain::normalize_phone;
use phonebook_core::CoreError;
use proptest::prelude::*;

fn separated(digits: &str, seps: &[u8]) -> String {
    let mut out = String::new();
    for (index, ch) in digits.chars().enumerate() {
        out.push(ch);
        match seps.get(index).copied().unwrap_or(0) % 4 {
            1 => out.push('-'),
            2 => out.push(' '),
            _ => {}
        }
    }
    out
}

proptest! {
    #[test]
    fn normalize_is_idempotent_for_valid_numbers(
        subscriber in "[0-9]{9}",
        international in any::<bool>(),
        seps in proptest::collection::vec(any::<u8>(), 9),
    ) {
        let raw = if international {
            format!("+380{}", separated(&subscriber, &seps))
        } else {
            format!("0{}", separated(&subscriber, &seps))
        };
        let once = normalize_phone(&raw).expect("valid phone");
        let twice = normalize_phone(&once).expect("normalized phone");
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, format!("+380{}", subscriber));
    }

    #[test]
    fn normalize_rejects_wrong_subscriber_length(
        subscriber in "[0-9]{0,20}".prop_filter("not nine digits", |s| s.len() != 9),
        international in any::<bool>(),
    ) {
        let raw = if international {
            format!("+380{}", subscriber)
        } else {
            format!("0{}", subscriber)
        };
        prop_assert_eq!(
            normalize_phone(&raw),
            Err(CoreError::InvalidPhoneFormat(raw.clone()))
        );
    }

    #[test]
    fn normalize_rejects_wrong_prefix(
        first in "[1-9]",
        rest in "[0-9]{9}",
    ) {
        let raw = format!("{}{}", first, rest);
        prop_assert!(normalize_phone(&raw).is_err());
    }
}
