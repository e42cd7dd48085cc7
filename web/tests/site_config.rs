use ui::core::config::SiteConfig;

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.json"));

#[test]
fn shipped_site_config_parses() {
    let config = SiteConfig::from_json(SITE_JSON).expect("site.json is valid");
    assert_eq!(config.gallery_images.len(), 7);
    assert_eq!(config.images_per_view, 3);
    assert_eq!(
        config.messaging_base(),
        "https://api.whatsapp.com/send?phone=6285792164690"
    );
}

#[test]
fn shipped_site_config_matches_builtin_defaults() {
    let config = SiteConfig::from_json(SITE_JSON).expect("site.json is valid");
    assert_eq!(config, SiteConfig::default());
}
