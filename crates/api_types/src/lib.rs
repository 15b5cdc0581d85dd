use serde::{Deserialize, Serialize};

/// Body of every successful edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod edit {
    use super::*;

    /// Missing fields deserialize as empty so they are reported as invalid
    /// input instead of being rejected by the extractor.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct EditCost {
        pub user_id: String,
        /// `Key=Value` items: `Date=`, `Category=`, `Amount=`.
        pub selected_data: Vec<String>,
        pub new_cost: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct EditCategory {
        pub user_id: String,
        pub selected_data: Vec<String>,
        pub new_category: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct EditDate {
        pub user_id: String,
        pub selected_data: Vec<String>,
        /// `YYYY-MM-DD` or `DD-Mon-YYYY`.
        pub new_date: String,
    }
}

pub mod history {
    use super::*;

    /// One row of `GET /display/{user_id}`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Expense {
        /// `YYYY-MM-DD` when the stored date parses, the raw field otherwise.
        pub expense_date: String,
        pub expense_category: String,
        pub expense_amount: String,
    }
}
