//! Fixed theme catalog for the local heuristic summariser.
//!
//! Keywords are matched as substrings of lower-cased review comments.
//! Declaration order matters: counts are accumulated in this order, and a
//! stable sort preserves it as the tie-break when ranking.

/// Theme keywords, in ranking tie-break order.
pub const THEMES: &[&str] = &[
    "battery",
    "price",
    "performance",
    "build",
    "quality",
    "screen",
    "display",
    "camera",
    "sound",
    "speaker",
    "shipping",
    "delivery",
    "size",
    "weight",
    "durable",
    "software",
];

/// Map a theme keyword to its human-readable label.
///
/// Several keywords collapse to one label ("build" and "quality" both
/// surface as "Build quality"); the summariser dedupes on the label.
pub fn humanize(theme: &str) -> &str {
    match theme {
        "battery" => "Battery life",
        "price" => "Price/value",
        "performance" => "Performance",
        "build" | "quality" => "Build quality",
        "screen" | "display" => "Display",
        "camera" => "Camera",
        "sound" | "speaker" => "Sound",
        "shipping" | "delivery" => "Shipping/delivery",
        "size" | "weight" => "Size/weight",
        "durable" => "Durability",
        "software" => "Software",
        other => other,
    }
}
