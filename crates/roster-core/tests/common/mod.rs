//! Shared fixtures for roster-core integration tests.

#![allow(dead_code)]

use roster_core::{Controller, Message, Record, RecordId};

/// The fifteen users served by the admin endpoint fixture.
pub fn users() -> Vec<Record> {
    [
        ("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        ("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
        ("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
        ("4", "Caterina Binotto", "caterina@mailinator.com", "member"),
        ("5", "Chetan Kumar", "chetan@mailinator.com", "member"),
        ("6", "Jim McClain", "jim@mailinator.com", "member"),
        ("7", "Mahaveer Singh", "mahaveer@mailinator.com", "member"),
        ("8", "Rahul Jain", "rahul@mailinator.com", "admin"),
        ("9", "Rizan Khan", "rizan@mailinator.com", "member"),
        ("10", "Sarah Potter", "sarah@mailinator.com", "admin"),
        ("11", "Keshav Muddaiah", "keshav@mailinator.com", "member"),
        ("12", "Nita Ramesh", "nita@mailinator.com", "member"),
        ("13", "Julia Hunstman", "julia@mailinator.com", "member"),
        ("14", "Juan Alonso", "juan@mailinator.com", "admin"),
        ("15", "Gabriel Montoya", "gabriel@mailinator.com", "admin"),
    ]
    .into_iter()
    .map(|(id, name, email, role)| Record::new(id, name, email, role))
    .collect()
}

/// A controller loaded with [`users`].
pub fn loaded_controller() -> Controller {
    let mut controller = Controller::new();
    controller.update(Message::loaded(Ok(users())));
    controller.drain_notifications();
    controller
}

pub fn id(value: &str) -> RecordId {
    RecordId::from(value)
}

/// Ids of the visible page, as strings.
pub fn visible(controller: &Controller) -> Vec<String> {
    controller
        .state()
        .visible_ids()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
