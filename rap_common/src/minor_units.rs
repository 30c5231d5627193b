use std::fmt::Display;

use serde::{Deserialize, Serialize};

//--------------------------------------     MinorUnits       ---------------------------------------------------------
/// An amount of money in minor currency units (pence, cents). The bank reports debits as negative values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(i64);

impl From<i64> for MinorUnits {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for MinorUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_two_decimals(self.0))
    }
}

impl MinorUnits {
    /// A credit is money coming into the account.
    pub fn is_credit(&self) -> bool {
        self.0 > 0
    }

    /// The amount as it is printed on a receipt for this debit: the sign is flipped and the value is shown in major
    /// units with exactly two decimal places, and no currency symbol. `-1050` becomes `"10.50"`.
    ///
    /// Receipts are matched by searching for this exact string in the receipt body, so the format must not change
    /// casually.
    pub fn to_receipt_amount(&self) -> String {
        format_two_decimals(self.0.saturating_neg())
    }
}

fn format_two_decimals(v: i64) -> String {
    let sign = if v < 0 { "-" } else { "" };
    let abs = v.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
