// Audit log actions
pub const USER_REGISTERED: &str = "USER_REGISTERED";
pub const USER_LOGGED_IN: &str = "USER_LOGGED_IN";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
pub const BALANCE_SHEET_EXPORTED: &str = "BALANCE_SHEET_EXPORTED";

/// Lifetime of a session token issued at login.
pub const SESSION_TTL_MINUTES: i64 = 60;

/// Largest difference tolerated when comparing split sums: half a currency minor
/// unit, so sums that agree to the cent compare equal and a full cent off does not.
/// Applies to currency amounts for `exact` splits and to percentage points for
/// `percentage` splits.
pub const SPLIT_TOLERANCE: f64 = 0.005;

pub const PERCENTAGE_TOTAL: f64 = 100.0;

pub const MAX_EXPENSE_AMOUNT: f64 = 1_000_000.0;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_TITLE_LENGTH: usize = 255;

/// Column keys and header labels of the exported balance sheet, in output order.
pub const BALANCE_SHEET_COLUMNS: [(&str, &str); 4] = [
    ("userId", "User ID"),
    ("totalPaid", "Total Paid"),
    ("totalOwed", "Total Owed"),
    ("netBalance", "Balance"),
];

pub const BALANCE_SHEET_FILE_PREFIX: &str = "balance-sheet";
