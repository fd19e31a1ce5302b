use super::{ClassificationRule, RuleTable, RuleTest};

pub const EMPTY_INPUT_REPLY: &str = "Please type a question so I can help.";

pub const FALLBACK_REPLY: &str = "I’m not sure about that one yet. Try asking about cleansers, sunscreen, acne, scrubs, or basic routine steps. For medical questions or serious skin concerns, please see a dermatologist.";

const BUILTIN_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        id: "cleanser",
        test: RuleTest::ContainsAny(&["cleanser", "face wash"]),
        reply: "A gentle, non-stripping cleanser twice a day is usually enough. Choose one suited to your skin type and avoid harsh soaps or scrubs.",
    },
    ClassificationRule {
        id: "sunscreen",
        test: RuleTest::ContainsAny(&["sunscreen", "spf", "sun"]),
        reply: "Use a broad-spectrum sunscreen SPF 30+ every morning, even on cloudy days. Reapply every 2 hours if you’re outdoors or near windows.",
    },
    ClassificationRule {
        id: "acne",
        test: RuleTest::ContainsAny(&["acne", "pimple", "breakout"]),
        reply: "For acne, keep your routine simple: gentle cleanser, non-comedogenic moisturizer and daily sunscreen. Add a salicylic acid or benzoyl peroxide treatment if needed, and see a dermatologist for persistent or severe acne.",
    },
    ClassificationRule {
        id: "serum",
        test: RuleTest::ContainsAny(&["serum", "vitamin c", "retinol"]),
        reply: "Vitamin C is usually used in the morning under sunscreen for brightening and antioxidant protection. Retinol is typically used at night, starting 2–3 times a week and slowly increasing as tolerated.",
    },
    ClassificationRule {
        id: "dry_skin",
        test: RuleTest::ContainsAny(&["dry skin", "dryness", "flaky"]),
        reply: "For dry skin, look for cleansers without sulfates and moisturizers with ceramides, glycerin or hyaluronic acid. Limit hot showers and avoid strong alcohol-based toners.",
    },
    ClassificationRule {
        id: "exfoliation",
        test: RuleTest::ContainsAny(&["scrub", "exfoli"]),
        reply: "Most people only need exfoliation 1–3 times per week. Over-exfoliating can damage your barrier and make skin red or sensitive.",
    },
    ClassificationRule {
        id: "greeting",
        test: RuleTest::ContainsAny(&["hello", "hi", "hey", "namaste"]),
        reply: "Hi, I’m EVI 👋 I can help you build simple skincare routines, suggest product categories, and explain how often to use each step.",
    },
    ClassificationRule {
        id: "moisturizer",
        test: RuleTest::ContainsAny(&[
            "moisturising",
            "moisturizer",
            "moisturizers",
            "cream",
            "moisturiser",
        ]),
        reply: "Squeeze the enough amount of moisturizer and use your fingers to spread it evenly.Gently massage your skin in a circular motion with your hands to make sure the cream is fully absorbed. When washing your face in the morning or removing your makeup at night, use gentle patting motions to prevent irritating your skin.",
    },
];

pub(super) fn builtin_table() -> RuleTable {
    RuleTable::new(BUILTIN_RULES.to_vec(), FALLBACK_REPLY)
}
