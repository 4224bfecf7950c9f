use rand::Rng;

/// Emoji appended to every ping.
const EMOJIS: &[&str] = &[
    "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
];

/// Returns an emoji drawn uniformly from the ping emoji list.
pub fn random_emoji() -> &'static str {
    let mut rng = rand::rng();
    EMOJIS[rng.random_range(0..EMOJIS.len())]
}
