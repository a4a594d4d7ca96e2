use crate::types::input::Category;
use crate::types::metrics::Verdict;

/// Fixed objective-tone justification line for a category/verdict pair. Pure
/// data lookup, deliberately decoupled from the tone mode.
pub fn justification(verdict: Verdict, category: Category) -> &'static str {
    use Category::*;
    match verdict {
        Verdict::Approved => match category {
            Skincare => "An investment in your future self.",
            Clothes => "Quality pieces pay for themselves over time.",
            Food => "Daily habits add up, but so does the joy.",
            Travel => "Memories last longer than things.",
            Subscription => "Recurring value justifies recurring costs.",
            Gift => "A calculated decision that brings joy.",
            Jewellery => "Rewear all year (weekly average).",
            Other => "A smart, calculated decision.",
        },
        Verdict::Justified => match category {
            Skincare => "Self-care is important, and you got a good deal.",
            Clothes => "A reasonable purchase for your wardrobe.",
            Food => "You deserve good food, and the price works.",
            Travel => "Experiences are worth investing in.",
            Subscription => "The value seems worth the cost.",
            Gift => "A thoughtful choice for someone special.",
            Jewellery => "Rewear all year (weekly average).",
            Other => "The math checks out on this one.",
        },
        Verdict::Questionable => match category {
            Skincare => "On the pricier side, but self-care matters.",
            Clothes => "It's a stretch, but you might make it work.",
            Food => "A bit expensive, but sometimes you need the treat.",
            Travel => "It's pricey, but experiences can be priceless.",
            Subscription => "Costly, but might pay off if you use it.",
            Gift => "A generous choice - maybe a bit too generous?",
            Jewellery => "High cost for sparkle, but maybe for a special occasion?",
            Other => "The math is... questionable, but not impossible.",
        },
        Verdict::Denied => match category {
            Skincare => "This price doesn't add up for what you're getting.",
            Clothes => "Hard to justify at this cost-per-wear ratio.",
            Food => "Too expensive for what it is - consider alternatives.",
            Travel => "The numbers don't support this purchase right now.",
            Subscription => "The monthly cost outweighs the value you'll get.",
            Gift => "As much as you want to give, this one's too much.",
            Jewellery => "The cost-per-sparkle doesn't math out today.",
            Other => "The math doesn't work out on this purchase.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_a_line() {
        for verdict in [
            Verdict::Approved,
            Verdict::Justified,
            Verdict::Questionable,
            Verdict::Denied,
        ] {
            for category in Category::ALL {
                assert!(!justification(verdict, category).is_empty());
            }
        }
    }

    #[test]
    fn lines_track_the_verdict_tone() {
        assert_eq!(
            justification(Verdict::Approved, Category::Skincare),
            "An investment in your future self."
        );
        assert_eq!(
            justification(Verdict::Denied, Category::Jewellery),
            "The cost-per-sparkle doesn't math out today."
        );
    }
}
