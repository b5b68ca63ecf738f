//! Column names of the workout sheet.

pub const DATE: &str = "Date";
pub const PULLUPS: &str = "Pullups";
pub const PUSHUPS: &str = "Pushups";
pub const SQUATS: &str = "Squats";
pub const BURPEES: &str = "Burpees";
pub const ABS: &str = "Abs";
pub const WEIGHTS: &str = "Weights";
pub const CARDIO_TYPE: &str = "Cardio Type";
pub const CARDIO_AMOUNT: &str = "Cardio Min/Reps";
pub const STRETCHED: &str = "Stretched";
pub const WEIGHT: &str = "Weight";
pub const FAT_PCT: &str = "Fat_Pct";
pub const WAIST_CM: &str = "Waist_cm";
pub const COMMENTS: &str = "Comments";
pub const WEIGHT_BAND: &str = "Weight Band";

/// Header written by `init` and by the form when the sheet is empty.
pub const CANONICAL: [&str; 14] = [
    DATE,
    PULLUPS,
    PUSHUPS,
    SQUATS,
    BURPEES,
    ABS,
    WEIGHTS,
    CARDIO_TYPE,
    CARDIO_AMOUNT,
    STRETCHED,
    WEIGHT,
    FAT_PCT,
    WAIST_CM,
    COMMENTS,
];

/// Placeholder for a missing text cell.
pub const PLACEHOLDER: &str = "N/A";

/// Cardio type meaning "no session today".
pub const NO_CARDIO: &str = "None";

/// Category selector value that disables the cardio filter.
pub const ALL_CATEGORIES: &str = "All";
