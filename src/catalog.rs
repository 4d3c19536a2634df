//! Canonical category and location lists for the campus portal.
//!
//! These are presentation vocabulary, not core invariants: the store and
//! query engine treat category and location as opaque strings, so callers
//! own these lists and may extend them without touching the data layer.
//! Filtering by a value outside the lists simply matches nothing.

pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Bags",
    "Accessories",
    "Personal Items",
    "Documents",
    "Books",
    "Clothing",
    "Sports Equipment",
    "Keys",
    "Other",
];

pub const LOCATIONS: [&str; 15] = [
    "Central Library",
    "Academic Block 1",
    "Academic Block 2",
    "Academic Block 3",
    "Main Cafeteria",
    "Food Court",
    "Sports Complex",
    "Hostel Area",
    "Parking Area",
    "Auditorium",
    "Computer Lab",
    "Laboratory",
    "Garden Area",
    "Bus Stop",
    "Other",
];
