/// Page components for the Roster web interface

pub mod users;
