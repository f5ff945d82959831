/// Movie identifiers are opaque strings (server-generated UUID v4 for new
/// records, arbitrary unique strings for seeded ones).
pub type MovieId = String;
