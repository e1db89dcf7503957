use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Authority level gating profile edits, order mutation, and history views.
///
/// Role values are compared exactly as stored; the schema constrains the
/// column to these three unpadded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Employee,
    Manager,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Customer" => Some(Self::Customer),
            "Employee" => Some(Self::Employee),
            "Manager" => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Employee => "Employee",
            Self::Manager => "Manager",
        }
    }

    /// Employees and managers share the staff branches of the workflows.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Employee | Self::Manager)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub login: String,
    pub password: String,
    pub phone: String,
    pub fav_items: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub item_name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub login: String,
    pub paid: bool,
    pub received_at: DateTime<Utc>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLine {
    pub order_id: i64,
    pub item_name: String,
    pub last_updated: DateTime<Utc>,
    pub status: String,
}
