/// Route of the detail page for a pokémon number.
pub fn detail_route(number: &str) -> String {
    format!("/pokemon/{}", number)
}

/// Text shown on a card: `"{number} {name}"`
pub fn card_label(number: &str, name: &str) -> String {
    format!("{} {}", number, name)
}

/// Render-ready entry of the list: summary joined with its detail by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonCard {
    pub number: String,
    pub name: String,
    pub image: String,
    pub link_target: String,
}

impl PokemonCard {
    /// A missing sprite yields an empty image source.
    pub fn new(id: u32, name: impl Into<String>, sprite: Option<String>) -> Self {
        let number = id.to_string();
        Self {
            link_target: detail_route(&number),
            number,
            name: name.into(),
            image: sprite.unwrap_or_default(),
        }
    }

    pub fn label(&self) -> String {
        card_label(&self.number, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields() {
        let card = PokemonCard::new(1, "bulbasaur", Some("bulbasaur.png".to_string()));
        assert_eq!(card.number, "1");
        assert_eq!(card.name, "bulbasaur");
        assert_eq!(card.image, "bulbasaur.png");
        assert_eq!(card.link_target, "/pokemon/1");
        assert_eq!(card.label(), "1 bulbasaur");
    }

    #[test]
    fn test_card_without_sprite() {
        let card = PokemonCard::new(10_001, "deoxys-attack", None);
        assert_eq!(card.image, "");
        assert_eq!(card.link_target, "/pokemon/10001");
    }
}
