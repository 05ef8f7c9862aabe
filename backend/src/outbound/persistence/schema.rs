//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; `diesel print-schema` can
//! regenerate them from a migrated database.

diesel::table! {
    /// Registered users. `age` is stored as free text.
    users (id) {
        id -> Int4,
        name -> Varchar,
        email -> Varchar,
        age -> Varchar,
    }
}

diesel::table! {
    /// Catalogue products with exact decimal prices.
    products (id) {
        id -> Int4,
        name -> Varchar,
        description -> Varchar,
        price -> Numeric,
        availability -> Bool,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        quantity -> Int4,
        total_price -> Numeric,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, products, orders);
