// Style label -> adjective used in the prompt. Matching is case-sensitive.
const STYLES: &[(&str, &str)] = &[
    ("Random", "inspiring"),
    ("Inspirational", "inspirational"),
    ("Motivational", "motivational"),
    ("Funny", "funny"),
    ("Philosophical", "philosophical"),
    ("Love", "romantic"),
    ("Sarcastic", "sarcastic"),
];

const FALLBACK_ADJECTIVE: &str = "inspiring";

pub fn style_adjective(style_type: &str) -> &'static str {
    STYLES
        .iter()
        .find(|(label, _)| *label == style_type)
        .map(|(_, adjective)| *adjective)
        .unwrap_or(FALLBACK_ADJECTIVE)
}

pub fn build_prompt(seed: &str, style_type: &str) -> String {
    let adjective = style_adjective(style_type);
    if seed.is_empty() {
        format!("Give me one short {} quote.", adjective)
    } else {
        format!("Give me one short {} quote about {}.", adjective, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_with_seed() {
        assert_eq!(
            build_prompt("the sea", "Love"),
            "Give me one short romantic quote about the sea."
        );
    }

    #[test]
    fn prompt_without_seed() {
        assert_eq!(build_prompt("", "Funny"), "Give me one short funny quote.");
    }

    #[test]
    fn unknown_style_uses_random_adjective() {
        assert_eq!(style_adjective("Grumpy"), "inspiring");
        // lookup is case-sensitive
        assert_eq!(style_adjective("funny"), "inspiring");
        assert_eq!(style_adjective(""), "inspiring");
    }

    #[test]
    fn every_known_style_maps() {
        for (label, adjective) in STYLES {
            assert_eq!(style_adjective(label), *adjective);
        }
    }
}
