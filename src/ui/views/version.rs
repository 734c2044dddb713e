use folio::config::CONFIG_FILE_NAME;

use crate::ui::widgets::card::{Card, CardStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut card = Card::with_title(format!("Folio v{}", version)).style(CardStyle::Featured);
    card.add_line("Catalog formats: toml, yaml");
    card.add_line(format!("Project config: {}", CONFIG_FILE_NAME));
    if let Some(user) = folio::config::user_config_path() {
        card.add_line(format!("User config: {}", user.display()));
    }
    card.render(supports_color, supports_unicode)
}
