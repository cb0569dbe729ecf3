/// Collection name for crime reports
///
/// Each document is one reported incident, keyed by its unique `DR_NO`
/// report number. Victims, weapons and upvotes reference a crime through
/// its `_id`.
pub const CRIMES_COLLECTION: &str = "crimes";

/// Collection name for victims associated with a crime
pub const VICTIMS_COLLECTION: &str = "victims";

/// Collection name for weapons associated with a crime
pub const WEAPONS_COLLECTION: &str = "weapons";

/// Collection name for officer upvotes on crime reports
///
/// Upvote documents are expired by the engine after the configured TTL
/// elapses past their `upvote_date`.
pub const UPVOTES_COLLECTION: &str = "upvotes";
