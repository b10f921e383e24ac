//! `tally contacts` subcommands.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Subcommand;
use tally_contacts::{Contact, ContactError, ContactId, ContactStore, sample_contacts};

#[derive(Debug, Subcommand)]
pub(crate) enum ContactsCommand {
    /// List all contacts, alphabetical by name
    List {
        /// Print the records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Add a contact
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Change fields of an existing contact; omitted fields keep their value
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Insert the sample contacts into an empty database
    Seed,
}

pub(crate) fn run(
    store: &mut ContactStore,
    command: ContactsCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ContactsCommand::List { json } => {
            let contacts = store.get_all()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&contacts)?)?;
            } else if contacts.is_empty() {
                writeln!(out, "no contacts")?;
            } else {
                for contact in &contacts {
                    writeln!(out, "{contact}")?;
                }
            }
        }
        ContactsCommand::Add {
            name,
            address,
            email,
            phone,
        } => {
            let saved = store.create(&Contact::new(name, address, email, phone))?;
            writeln!(out, "added {saved}")?;
        }
        ContactsCommand::Update {
            id,
            name,
            address,
            email,
            phone,
        } => {
            let id = ContactId::new(id);
            let Some(mut contact) = store.get_by_id(id)? else {
                bail!(ContactError::NotFound(id));
            };
            for (field, value) in [
                (&mut contact.name, name),
                (&mut contact.address, address),
                (&mut contact.email, email),
                (&mut contact.phone, phone),
            ] {
                if let Some(value) = value {
                    *field = value;
                }
            }
            let updated = store
                .update(&contact)?
                .ok_or(ContactError::NotFound(id))?;
            writeln!(out, "updated {updated}")?;
        }
        ContactsCommand::Delete { id } => {
            let id = ContactId::new(id);
            if !store.delete_by_id(id)? {
                bail!(ContactError::NotFound(id));
            }
            writeln!(out, "deleted contact {id}")?;
        }
        ContactsCommand::Seed => match store.seed_sample_data(&sample_contacts())? {
            0 => writeln!(out, "database already has contacts; nothing seeded")?,
            n => writeln!(out, "seeded {n} contacts")?,
        },
    }
    Ok(())
}
