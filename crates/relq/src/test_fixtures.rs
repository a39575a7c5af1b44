//! Shared schema fixture used across module tests.
//!
//! Shape: a three-level `Member` -> `Author` -> `StaffAuthor` ancestry,
//! one-to-one hops to `Company`, a reverse-keyed `Books` collection, the
//! `Team`/`Player` many-to-many from the filter contract, and a keyless
//! `Fan` child to exercise the reverse-FK fallback.

use crate::schema::{EntityDef, Schema};

pub(crate) fn library_schema() -> Schema {
    Schema::new()
        .entity(
            EntityDef::new("Member")
                .field("Email")
                .field("Nickname"),
        )
        .entity(
            EntityDef::new("Author")
                .parent("Member")
                .field("Bio")
                .has_one("Company", "Company")
                .has_many("Books", "Book")
                .many_many("Clubs", "Club"),
        )
        .entity(
            EntityDef::new("StaffAuthor")
                .parent("Author")
                .field("Badge")
                .has_many("Comments", "Comment"),
        )
        .entity(EntityDef::new("Company").fields(["Name", "City"]))
        .entity(EntityDef::new("Club").field("Name"))
        .entity(
            EntityDef::new("Book")
                .field("Title")
                .has_one("Author", "Author"),
        )
        .entity(
            EntityDef::new("Comment")
                .field("Body")
                .has_one("Member", "Member"),
        )
        .entity(
            EntityDef::new("Team")
                .field("Title")
                .many_many("Players", "Player")
                .has_many("Fans", "Fan"),
        )
        .entity(EntityDef::new("Player").fields(["Name", "Shirt"]))
        .entity(EntityDef::new("Fan").field("Name"))
}
