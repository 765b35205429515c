//! Fixed category → subcategory taxonomy for collected entries.
//!
//! Every category lists `Others` as its final subcategory, and `Others` is
//! itself a category whose only subcategory is `Others`. Lookups that miss
//! fall back to the `Others` category.

/// Fallback category and subcategory name.
pub const OTHERS: &str = "Others";

const TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Infrastructure",
        &[
            "Pothole",
            "Road Damage",
            "Broken Sidewalk",
            "Streetlight",
            "Damaged Bridge",
            "Drainage Issue",
            OTHERS,
        ],
    ),
    (
        "Utilities",
        &[
            "No Water",
            "Low Water Pressure",
            "Pipe Leak",
            "Power Outage",
            "Damaged Power Line",
            "Internet Issue",
            OTHERS,
        ],
    ),
    (
        "Public Safety",
        &[
            "Fire",
            "Crime",
            "Stray Animals",
            "Vandalism",
            "Unsafe Structure",
            "Missing Signage",
            OTHERS,
        ],
    ),
    (
        "Sanitation",
        &[
            "Garbage Collection",
            "Illegal Dumping",
            "Overflowing Trash",
            "Clogged Drain",
            "Bad Odor",
            "Pest Infestation",
            OTHERS,
        ],
    ),
    (
        "Traffic",
        &[
            "Traffic Light Issue",
            "Road Obstruction",
            "Illegal Parking",
            "Missing Road Signs",
            "Traffic Congestion",
            "Accident",
            OTHERS,
        ],
    ),
    (
        "Environment",
        &[
            "Flood",
            "Fallen Tree",
            "Air Pollution",
            "Water Pollution",
            "Soil Erosion",
            "Illegal Burning",
            OTHERS,
        ],
    ),
    (OTHERS, &[OTHERS]),
];

/// All category names in display order.
pub fn categories() -> impl Iterator<Item = &'static str> {
    TAXONOMY.iter().map(|(category, _)| *category)
}

/// Subcategories offered for `category`; unknown categories get the `Others` list.
#[must_use]
pub fn subcategories(category: &str) -> &'static [&'static str] {
    TAXONOMY
        .iter()
        .find(|(name, _)| *name == category)
        .or_else(|| TAXONOMY.iter().find(|(name, _)| *name == OTHERS))
        .map_or(&[OTHERS], |(_, subs)| subs)
}

/// First category that lists `subcategory`, or `Others` when none does.
#[must_use]
pub fn category_for_subcategory(subcategory: &str) -> &'static str {
    TAXONOMY
        .iter()
        .find(|(_, subs)| subs.contains(&subcategory))
        .map_or(OTHERS, |(category, _)| category)
}

/// Whether `category` is a known category name.
#[must_use]
pub fn is_category(category: &str) -> bool {
    TAXONOMY.iter().any(|(name, _)| *name == category)
}

/// Whether `subcategory` is offered under `category`.
#[must_use]
pub fn is_valid_pair(category: &str, subcategory: &str) -> bool {
    is_category(category) && subcategories(category).contains(&subcategory)
}

/// Category/subcategory pair suggested by a mission's `suggested_category`.
///
/// Missions name a subcategory; the category is derived from it. A missing
/// suggestion yields `(Others, Others)`.
#[must_use]
pub fn suggestion(suggested_subcategory: Option<&str>) -> (&'static str, String) {
    let subcategory = suggested_subcategory.unwrap_or(OTHERS);
    (
        category_for_subcategory(subcategory),
        subcategory.to_string(),
    )
}
