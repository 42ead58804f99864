//! Demo data loaded at startup
//!
//! Ratings are chosen so the recomputed averages match the ratings shown for
//! the demo stores: 4.5, 3.8, 4.2, 4.7 and 4.0.

use chrono::NaiveDate;

use crate::{
    catalog::Catalog,
    models::{Credentials, DEFAULT_STORE_IMAGE, Rating, RatingValue, Role, Store, User},
};

fn user(id: u64, name: &str, email: &str, address: &str, role: Role) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        role,
        credentials: Credentials::Demo,
    }
}

fn store(
    id: u64,
    name: &str,
    email: &str,
    address: &str,
    description: &str,
    owner_id: Option<u64>,
) -> Store {
    Store {
        id,
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        description: description.to_string(),
        rating: 0.0,
        image: DEFAULT_STORE_IMAGE.to_string(),
        owner_id,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn demo_users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", "123 Main St, New York", Role::Admin),
        user(2, "Jane Smith", "jane@example.com", "456 Broadway, San Francisco", Role::Normal),
        user(3, "Bob Johnson", "bob@example.com", "789 Oak St, Chicago", Role::Store),
        user(4, "Alice Brown", "alice@example.com", "101 Pine Ave, Seattle", Role::Normal),
        user(5, "Charlie Wilson", "charlie@example.com", "202 Maple Dr, Boston", Role::Store),
    ]
}

fn demo_stores() -> Vec<Store> {
    vec![
        store(
            1,
            "Coffee Haven",
            "info@coffeehaven.com",
            "123 Main St, New York",
            "A cozy coffee shop with a wide variety of specialty coffees and pastries.",
            Some(3),
        ),
        store(
            2,
            "Tech Galaxy",
            "support@techgalaxy.com",
            "456 Broadway, San Francisco",
            "The latest in technology gadgets and accessories. Expert staff to help with all your tech needs.",
            Some(5),
        ),
        store(
            3,
            "Fashion World",
            "contact@fashionworld.com",
            "789 Fashion Ave, Los Angeles",
            "Trendy clothing and accessories for all seasons. From casual to formal, we've got you covered.",
            None,
        ),
        store(
            4,
            "Healthy Eats",
            "hello@healthyeats.com",
            "101 Green St, Chicago",
            "Organic and locally sourced ingredients. Vegan and gluten-free options available.",
            None,
        ),
        store(
            5,
            "Book Corner",
            "books@bookcorner.com",
            "202 Reader Rd, Boston",
            "A quiet bookstore with a vast collection of books across all genres. Coffee shop inside.",
            None,
        ),
    ]
}

fn demo_ratings() -> Vec<Rating> {
    // (store, user, value, date)
    let rows: [(u64, u64, i64, NaiveDate); 18] = [
        (1, 2, 5, date(2023, 5, 10)),
        (1, 3, 4, date(2023, 5, 8)),
        (2, 2, 3, date(2023, 5, 5)),
        (2, 1, 4, date(2023, 4, 28)),
        (2, 3, 4, date(2023, 4, 20)),
        (2, 4, 4, date(2023, 4, 12)),
        (2, 5, 4, date(2023, 4, 2)),
        (3, 2, 5, date(2023, 4, 10)),
        (3, 1, 4, date(2023, 3, 30)),
        (3, 3, 4, date(2023, 3, 22)),
        (3, 4, 4, date(2023, 3, 15)),
        (3, 5, 4, date(2023, 3, 1)),
        (4, 1, 5, date(2023, 5, 1)),
        (4, 2, 5, date(2023, 4, 25)),
        (4, 4, 4, date(2023, 4, 18)),
        (5, 4, 4, date(2023, 5, 3)),
        (5, 5, 4, date(2023, 4, 27)),
        (5, 1, 4, date(2023, 4, 9)),
    ];

    rows.into_iter()
        .zip(1u64..)
        .filter_map(|((store_id, user_id, value, date), id)| {
            Some(Rating {
                id,
                store_id,
                user_id,
                value: RatingValue::new(value).ok()?,
                date,
            })
        })
        .collect()
}

/// Catalog pre-filled with the demo users, stores and ratings
pub fn demo_catalog() -> Catalog {
    Catalog::from_parts(demo_users(), demo_stores(), demo_ratings())
}
