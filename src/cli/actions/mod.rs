pub mod account;

/// Account operation selected on the command line.
#[derive(Debug)]
pub enum Action {
    Create {
        callsign: String,
        full_name: Option<String>,
    },
    Show {
        callsign: String,
    },
    Update {
        callsign: String,
        full_name: String,
    },
    Delete {
        callsign: String,
    },
}
