use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleCategory {
    Oriental,
    Ancient,
    ByzantineIslamic,
    Impressionism,
    PostImpressionism,
    Fauvism,
    Expressionism,
    Renaissance,
    Baroque,
    Rococo,
    Romanticism,
    Masters,
    #[serde(other)]
    Unknown,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 12] = [
        Self::Oriental,
        Self::Ancient,
        Self::ByzantineIslamic,
        Self::Impressionism,
        Self::PostImpressionism,
        Self::Fauvism,
        Self::Expressionism,
        Self::Renaissance,
        Self::Baroque,
        Self::Rococo,
        Self::Romanticism,
        Self::Masters,
    ];

    pub fn value(&self) -> &str {
        match *self {
            Self::Oriental => "oriental",
            Self::Ancient => "ancient",
            Self::ByzantineIslamic => "byzantineIslamic",
            Self::Impressionism => "impressionism",
            Self::PostImpressionism => "postImpressionism",
            Self::Fauvism => "fauvism",
            Self::Expressionism => "expressionism",
            Self::Renaissance => "renaissance",
            Self::Baroque => "baroque",
            Self::Rococo => "rococo",
            Self::Romanticism => "romanticism",
            Self::Masters => "masters",
            Self::Unknown => "unknown",
        }
    }

    /// Heading shown in the style picker.
    pub fn label(&self) -> &str {
        match *self {
            Self::Oriental => "동양화",
            Self::Ancient => "고대 미술",
            Self::ByzantineIslamic => "비잔틴·이슬람",
            Self::Impressionism => "인상주의",
            Self::PostImpressionism => "후기인상주의",
            Self::Fauvism => "야수파",
            Self::Expressionism => "표현주의",
            Self::Renaissance => "르네상스",
            Self::Baroque => "바로크",
            Self::Rococo => "로코코",
            Self::Romanticism => "낭만주의",
            Self::Masters => "거장",
            Self::Unknown => "기타",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_names() {
        let category: StyleCategory = serde_json::from_str("\"byzantineIslamic\"").unwrap();
        assert_eq!(category, StyleCategory::ByzantineIslamic);

        let category: StyleCategory = serde_json::from_str("\"postImpressionism\"").unwrap();
        assert_eq!(category, StyleCategory::PostImpressionism);
    }

    #[test]
    fn unrecognized_names_become_unknown() {
        let category: StyleCategory = serde_json::from_str("\"cubism\"").unwrap();
        assert_eq!(category, StyleCategory::Unknown);
    }

    #[test]
    fn value_matches_wire_name() {
        for category in StyleCategory::ALL {
            let wire = serde_json::to_string(&category).unwrap();
            assert_eq!(wire, format!("\"{}\"", category.value()));
        }
    }
}
