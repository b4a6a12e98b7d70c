use serde::{Deserialize, Serialize};

/// A natural person registered at the branch
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub birth_date: String,  // Kept as typed (dd-mm-yyyy)
    pub national_id: String, // Unique key
    pub address: String,
}
