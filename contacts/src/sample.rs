use tally_types::Contact;

const FLINTSTONES: &str = "301 Cobblestone Way, Bedrock";
const RUBBLES: &str = "303 Cobblestone Way, Bedrock";

/// Demo records for an empty address book.
#[must_use]
pub fn sample_contacts() -> Vec<Contact> {
    [
        ("Fred Flintstone", FLINTSTONES, "fred.flintstone", "555-0101"),
        ("Wilma Flintstone", FLINTSTONES, "wilma.flintstone", "555-0102"),
        ("Barney Rubble", RUBBLES, "barney.rubble", "555-0201"),
        ("Betty Rubble", RUBBLES, "betty.rubble", "555-0202"),
        ("Pebbles Flintstone", FLINTSTONES, "pebbles.flintstone", "555-0103"),
        ("Bamm-Bamm Rubble", RUBBLES, "bammbamm.rubble", "555-0203"),
    ]
    .into_iter()
    .map(|(name, address, user, phone)| {
        Contact::new(name, address, format!("{user}@bedrock.com"), phone)
    })
    .collect()
}
