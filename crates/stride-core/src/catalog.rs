//! Compiled-in motivational tip catalog.
//!
//! The catalog backs the tier-3 fallback card. It is a fixed table baked
//! into the binary rather than a loaded resource, so the fallback path can
//! never fail to produce a card. Ids are contiguous starting at 1.

use serde::{Deserialize, Serialize};

/// One motivational tip, drawn from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipRecord {
    /// Stable catalog id, contiguous from 1.
    pub id: u32,
    /// Icon name for the UI layer.
    pub icon: String,
    pub title: String,
    pub subtitle: String,
}

struct TipDef {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
}

const TIPS: &[TipDef] = &[
    TipDef { icon: "figure.walk", title: "Little walks add up", subtitle: "A 10-minute stroll is roughly a thousand steps." },
    TipDef { icon: "stairs", title: "Take the stairs", subtitle: "Two flights of stairs count more than you think." },
    TipDef { icon: "cup.and.saucer", title: "Walk your coffee", subtitle: "Grab your next coffee from the place one block further." },
    TipDef { icon: "phone", title: "Pace your calls", subtitle: "Walking while on the phone is effortless extra distance." },
    TipDef { icon: "bus", title: "Hop off early", subtitle: "Leave the bus one stop before yours and walk the rest." },
    TipDef { icon: "sunrise", title: "Morning momentum", subtitle: "Steps before breakfast make the daily goal feel lighter." },
    TipDef { icon: "music.note", title: "Soundtrack your stride", subtitle: "An upbeat playlist can add minutes without noticing." },
    TipDef { icon: "pawprint", title: "Bonus lap", subtitle: "Dog walks love a second loop around the block." },
    TipDef { icon: "cart", title: "Park farther away", subtitle: "The far end of the lot is free training." },
    TipDef { icon: "clock", title: "Hourly reset", subtitle: "Stand up and move for two minutes every hour." },
    TipDef { icon: "drop", title: "Refill often", subtitle: "A smaller water bottle means more trips to the kitchen." },
    TipDef { icon: "tree", title: "Green routes", subtitle: "Parks make the same distance feel shorter." },
    TipDef { icon: "figure.2", title: "Walk and talk", subtitle: "Turn your next catch-up into a walking meeting." },
    TipDef { icon: "moon", title: "Evening wind-down", subtitle: "A short walk after dinner helps sleep and your goal." },
    TipDef { icon: "envelope", title: "Deliver in person", subtitle: "Walk over instead of sending that message." },
    TipDef { icon: "map", title: "New streets", subtitle: "An unfamiliar route keeps walking interesting." },
    TipDef { icon: "cloud.rain", title: "Rainy-day laps", subtitle: "Malls and station corridors work when it pours." },
    TipDef { icon: "timer", title: "Ten before ten", subtitle: "A thousand steps before 10 a.m. sets the tone." },
    TipDef { icon: "book", title: "Audiobook miles", subtitle: "Save a gripping audiobook for walks only." },
    TipDef { icon: "flame", title: "Protect the streak", subtitle: "On busy days, aim for the minimum - not zero." },
    TipDef { icon: "figure.stairs", title: "Skip the elevator", subtitle: "Under four floors, stairs are usually faster anyway." },
    TipDef { icon: "bicycle", title: "Mix it up", subtitle: "Cross-training days keep your legs fresh for walking." },
    TipDef { icon: "bed.double", title: "Sleep fuels steps", subtitle: "Rested legs walk farther. Guard your bedtime." },
    TipDef { icon: "fork.knife", title: "Lunch loop", subtitle: "A 15-minute loop after lunch beats the afternoon dip." },
    TipDef { icon: "calendar", title: "Plan one walk", subtitle: "Put a daily walk in your calendar like any meeting." },
    TipDef { icon: "shoe", title: "Shoes by the door", subtitle: "Ready shoes remove the biggest excuse." },
    TipDef { icon: "sun.max", title: "Chase daylight", subtitle: "Midday light boosts mood and makes walks easier." },
    TipDef { icon: "heart", title: "Easy pace counts", subtitle: "You don't need to rush - steps are steps." },
    TipDef { icon: "person.2", title: "Recruit a partner", subtitle: "Walks happen more often when someone expects you." },
    TipDef { icon: "arrow.up", title: "Hills are free gyms", subtitle: "One hilly route a week builds real strength." },
    TipDef { icon: "trash", title: "Errand bundling", subtitle: "Chain small errands into one longer walk." },
    TipDef { icon: "tv", title: "Ad-break moves", subtitle: "Pace the room during breaks and loading screens." },
    TipDef { icon: "star", title: "Celebrate small wins", subtitle: "Every goal day is a win worth noticing." },
    TipDef { icon: "wind", title: "Breathe on purpose", subtitle: "Nasal breathing keeps an easy pace honest." },
    TipDef { icon: "bag", title: "Carry light", subtitle: "A lighter bag makes the walking option attractive." },
    TipDef { icon: "signpost", title: "Landmark goals", subtitle: "Walk to a landmark and back instead of counting minutes." },
    TipDef { icon: "snowflake", title: "Cold is a layer problem", subtitle: "Dress right and winter walks become the best ones." },
    TipDef { icon: "camera", title: "Photo walks", subtitle: "Hunting one good photo stretches any walk." },
    TipDef { icon: "house", title: "Home circuits", subtitle: "Laps at home count when going out isn't an option." },
    TipDef { icon: "gauge", title: "Beat yesterday", subtitle: "One percent more than yesterday compounds fast." },
    TipDef { icon: "puzzle", title: "Habit stacking", subtitle: "Attach a short walk to a habit you already have." },
    TipDef { icon: "checkmark", title: "Check in early", subtitle: "Glancing at progress at noon leaves time to act." },
    TipDef { icon: "leaf", title: "Seasonal routes", subtitle: "The same street changes every season. Revisit it." },
    TipDef { icon: "bell", title: "One reminder is enough", subtitle: "Pick a single daily nudge time that fits your life." },
    TipDef { icon: "scale", title: "Consistency beats volume", subtitle: "Five steady days outweigh one heroic Sunday." },
    TipDef { icon: "mappin", title: "Explore your radius", subtitle: "Everything within a kilometer is walking distance." },
    TipDef { icon: "battery", title: "Energy follows motion", subtitle: "Tired? A slow five-minute walk usually helps." },
    TipDef { icon: "gift", title: "Reward the week", subtitle: "A full goal week deserves a treat you pick in advance." },
    TipDef { icon: "arrow.triangle", title: "Detour on purpose", subtitle: "The scenic way home is a disguised workout." },
    TipDef { icon: "sparkles", title: "Begin again", subtitle: "A missed day is a data point, not a verdict." },
];

/// Number of tips in the catalog.
pub fn catalog_len() -> usize {
    TIPS.len()
}

/// Build the tip record at the given catalog index (0-based).
///
/// # Panics
/// Panics if `index` is out of bounds; callers index via `catalog_len()`
/// or `tip_ids()`.
pub fn tip_by_index(index: usize) -> TipRecord {
    let def = &TIPS[index];
    TipRecord {
        id: index as u32 + 1,
        icon: def.icon.to_string(),
        title: def.title.to_string(),
        subtitle: def.subtitle.to_string(),
    }
}

/// Look up a tip by its catalog id (1-based). Returns `None` for unknown ids.
pub fn tip_by_id(id: u32) -> Option<TipRecord> {
    if id == 0 || id as usize > TIPS.len() {
        return None;
    }
    Some(tip_by_index(id as usize - 1))
}

/// All catalog ids in order (1..=len).
pub fn tip_ids() -> impl Iterator<Item = u32> {
    1..=TIPS.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(catalog_len(), 50);
    }

    #[test]
    fn test_ids_contiguous_from_one() {
        let ids: Vec<u32> = tip_ids().collect();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&50));
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, i as u32 + 1);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let tip = tip_by_id(1).unwrap();
        assert_eq!(tip.id, 1);
        assert!(!tip.title.is_empty());

        assert!(tip_by_id(0).is_none());
        assert!(tip_by_id(51).is_none());
    }

    #[test]
    fn test_records_nonempty() {
        for id in tip_ids() {
            let tip = tip_by_id(id).unwrap();
            assert!(!tip.icon.is_empty());
            assert!(!tip.title.is_empty());
            assert!(!tip.subtitle.is_empty());
        }
    }
}
