//! Combat domain: contacts collected for the current tick.

use bevy::prelude::*;

use crate::player::Contact;

/// Contacts gathered from collision events, drained by the player tick.
#[derive(Resource, Debug, Default)]
pub struct PendingContacts {
    pub contacts: Vec<Contact>,
}

impl PendingContacts {
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn take(&mut self) -> Vec<Contact> {
        std::mem::take(&mut self.contacts)
    }
}
