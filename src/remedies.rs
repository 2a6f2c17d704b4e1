//! Static remedy texts, one per constitution class.
//!
//! Hand-authored content in the base language (English), with the lightweight
//! markup the result page renders and the narration pipeline strips.

use crate::predictor::Prakriti;

const VATA_REMEDIES: &str = "\
### 🌿 Vata Dosha (Air)
- Common Issues: Dry skin, bloating, anxiety, joint pain, insomnia
- Balance with: Warm, oily, and grounding foods & habits

Home Remedies
- Sesame Oil Massage – Reduces dryness
- Ginger & Ajwain Tea – Boosts digestion
- Warm Milk with Nutmeg – Aids better sleep
- Soaked Almonds – Nourishes nervous system
- Turmeric & Ghee Mix – Reduces joint pain
- Avoid: Cold foods, raw vegetables, excessive fasting
";

const PITTA_REMEDIES: &str = "\
### 🔥 Pitta Dosha (Fire)
- Common Issues: Acid reflux, inflammation, irritability, skin rashes
- Balance with: Cooling, hydrating, and calming remedies

Home Remedies
- Aloe Vera Juice – Cools acidity
- Coconut Water – Naturally hydrating
- Coriander & Fennel Tea – Soothes digestion
- Sandalwood Paste – Reduces rashes
- Cucumber & Mint Smoothie – Cools internal heat
- Avoid: Spicy foods, fermented foods, caffeine
";

const KAPHA_REMEDIES: &str = "\
### 🌍 Kapha Dosha (Earth & Water)
- Common Issues: Weight gain, sluggish digestion, mucus buildup, lethargy
- Balance with: Light, warm, and stimulating foods

Home Remedies
- Honey & Warm Water – Burns excess fat
- Ginger & Black Pepper Tea – Stimulates metabolism
- Turmeric & Cinnamon Milk – Boosts immunity
- Triphala Powder – Detoxifies body
- Dry Brushing – Improves circulation
- Avoid: Dairy, fried foods, excessive sweets
";

/// Fallback for a label with no table entry. The class set is closed, so this
/// only ever shows if the remedy table and the label encoder drift apart.
pub const NO_REMEDIES_FOUND: &str = "❌ No remedies found.";

/// Look up the remedy block for a predicted class. Total over the class set.
pub fn remedy_for(prakriti: Prakriti) -> &'static str {
    match prakriti {
        Prakriti::Vata => VATA_REMEDIES,
        Prakriti::Pitta => PITTA_REMEDIES,
        Prakriti::Kapha => KAPHA_REMEDIES,
    }
}

/// String-keyed lookup with the defensive default.
pub fn remedy_for_label(label: &str) -> &'static str {
    match Prakriti::from_label(label) {
        Some(prakriti) => remedy_for(prakriti),
        None => NO_REMEDIES_FOUND,
    }
}
