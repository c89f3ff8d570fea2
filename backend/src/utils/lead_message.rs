use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub const SITE_NAME: &str = "PyBot AI";

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn format_lead_message<Tz>(name: &str, phone: &str, received_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "🔔 <b>Новая заявка с сайта {site}</b>\n\
         \n\
         👤 <b>Имя:</b> {name}\n\
         📞 <b>Телефон:</b> {phone}\n\
         🕐 <b>Время:</b> {time}\n\
         \n\
         ---\n\
         Сайт: {site}",
        site = SITE_NAME,
        name = escape_html(name),
        phone = escape_html(phone),
        time = received_at.format("%d.%m.%Y %H:%M:%S"),
    )
}

/// Fixed notification used to check bot credentials end to end.
pub fn format_test_message() -> String {
    "🔔 <b>Тестовое сообщение</b>\n\
     \n\
     Это тестовая заявка для проверки работы бота.\n\
     \n\
     👤 <b>Имя:</b> Тестовый пользователь\n\
     📞 <b>Телефон:</b> +7 (999) 123-45-67\n\
     🕐 <b>Время:</b> Тест"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn renders_name_phone_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 9, 5, 7).unwrap();
        let message = format_lead_message("Анна", "+7 (999) 123-45-67", &at);

        assert_eq!(
            message,
            "🔔 <b>Новая заявка с сайта PyBot AI</b>\n\n\
             👤 <b>Имя:</b> Анна\n\
             📞 <b>Телефон:</b> +7 (999) 123-45-67\n\
             🕐 <b>Время:</b> 04.03.2025 09:05:07\n\n\
             ---\n\
             Сайт: PyBot AI"
        );
    }

    #[test]
    fn markup_in_name_is_escaped() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let message = format_lead_message("<b>Tom & Jerry</b>", "123", &at);
        assert!(message.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(!message.contains("<b>Tom"));
    }

    #[test]
    fn test_message_mentions_test_user() {
        assert!(format_test_message().contains("Тестовый пользователь"));
    }
}
