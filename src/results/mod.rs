mod queries;
mod reader;
mod row;
mod summary;

pub use queries::{DEFAULT_THRESHOLD, DEFAULT_TOP, fraction_above, top_rules};
pub use reader::{read_records, read_rows, records_from_reader, rows_from_reader};
pub use row::{
    CORRECTIONS_WITH_ADDITION, CORRECTIONS_WITH_DELETION, CORRECTIONS_WITH_REPLACEMENT,
    CURRENT_VIOLATIONS, PROPERTY_INSTANCES, ResultRow, TEST_SET_SIZE,
};
pub use summary::{ConstraintSummary, FamilyEvaluation};
