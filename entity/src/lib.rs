pub mod student;
pub mod user;

/*
 Students and users share the same store but are unrelated tables.
 Users exist only to gate the dashboard; nothing references them.
 Student ids are assigned by the store, never by the client.
 */
