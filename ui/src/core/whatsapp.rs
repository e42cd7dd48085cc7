//! Messaging deep links (`…/send?phone=<n>&text=<message>`).

use url::Url;

use crate::core::config::SiteConfig;
use crate::i18n::Lang;

/// Sentence pre-filled into every chat link on the page.
pub fn prefill_text(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Hello Sierra Villa, is the villa available on ",
        Lang::Id => "Hallo Sierra Villa, apakah villa tersedia untuk tanggal ",
    }
}

/// Chat link carrying a fully composed message for the configured recipient.
pub fn send_link(config: &SiteConfig, message: &str) -> String {
    format!(
        "{}&text={}",
        config.messaging_base(),
        urlencoding::encode(message)
    )
}

/// Replace the `text` query parameter of `href`, keeping every other
/// parameter in place. Hrefs that do not parse as absolute URLs get the
/// parameter appended instead.
pub fn with_text(href: &str, text: &str) -> String {
    let Ok(mut url) = Url::parse(href) else {
        let sep = if href.contains('?') { '&' } else { '?' };
        return format!("{href}{sep}text={}", urlencoding::encode(text));
    };

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        let mut written = false;
        for (key, value) in &pairs {
            if key == "text" {
                if !written {
                    query.append_pair("text", text);
                    written = true;
                }
            } else {
                query.append_pair(key, value);
            }
        }
        if !written {
            query.append_pair("text", text);
        }
    }
    url.to_string()
}

/// Decoded value of the `text` parameter, if any.
pub fn text_param(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(href: &str) -> Vec<(String, String)> {
        Url::parse(href)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn language_change_rewrites_text_and_keeps_other_params() {
        let base = "https://api.whatsapp.com/send?phone=6285792164690&source=footer";
        let id_link = with_text(base, prefill_text(Lang::Id));
        let en_link = with_text(&id_link, prefill_text(Lang::En));

        assert_eq!(
            params(&en_link),
            vec![
                ("phone".to_string(), "6285792164690".to_string()),
                ("source".to_string(), "footer".to_string()),
                ("text".to_string(), prefill_text(Lang::En).to_string()),
            ]
        );
        assert_eq!(
            text_param(&with_text(&en_link, prefill_text(Lang::Id))).as_deref(),
            Some(prefill_text(Lang::Id))
        );
    }

    #[test]
    fn existing_text_is_replaced_in_position() {
        let link = with_text("https://wa.me/628?text=old&x=1", "new");
        assert_eq!(
            params(&link),
            vec![
                ("text".to_string(), "new".to_string()),
                ("x".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn relative_hrefs_fall_back_to_appending() {
        assert_eq!(
            with_text("/send?phone=1", "a b"),
            "/send?phone=1&text=a%20b"
        );
        assert_eq!(with_text("chat", "hi"), "chat?text=hi");
    }

    #[test]
    fn send_link_percent_encodes_the_message() {
        let link = send_link(&SiteConfig::default(), "Halo,\nNama: Test");
        assert!(link.starts_with("https://api.whatsapp.com/send?phone=6285792164690&text="));
        assert!(link.ends_with("Halo%2C%0ANama%3A%20Test"));
        assert_eq!(text_param(&link).as_deref(), Some("Halo,\nNama: Test"));
    }
}
